//! `DueQueue`: sparse per-minute route activation queue.
//!
//! # Why this exists
//!
//! Most routes are not due on most generator ticks (a 40-minute route is due
//! on one tick in four).  Checking every route on every tick costs
//! O(ticks × routes) regardless of how many departures actually happen.
//!
//! `DueQueue` inverts the problem: after a route departs it registers the
//! minute at which it is next due.  Each tick the generator drains only the
//! routes whose due minute has arrived.
//!
//! Routes are identified by their index in the caller's route slice.  Routes
//! drained together are returned in ascending index order, so departures that
//! fall on the same tick are recorded in input order.

use std::collections::BTreeMap;

use roster_core::Minute;

/// A priority queue mapping due minutes → route indices due at that minute.
#[derive(Default)]
pub struct DueQueue {
    inner: BTreeMap<Minute, Vec<usize>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl DueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue with routes `0..route_count` all due at `start`.
    pub fn all_due_at(route_count: usize, start: Minute) -> Self {
        let mut queue = Self::new();
        for i in 0..route_count {
            queue.push(start, i);
        }
        queue
    }

    /// Schedule route `idx` to be due at `t`.
    pub fn push(&mut self, t: Minute, idx: usize) {
        self.inner.entry(t).or_default().push(idx);
        self.total += 1;
    }

    /// Remove and return every route due at or before `now`, ascending by
    /// index.
    ///
    /// Returns `None` if nothing is due (common case on most ticks; avoids
    /// allocation).
    pub fn drain_due(&mut self, now: Minute) -> Option<Vec<usize>> {
        match self.next_due() {
            Some(t) if t <= now => {}
            _ => return None,
        }
        let later = self.inner.split_off(&now.offset(1));
        let due = std::mem::replace(&mut self.inner, later);

        let mut routes: Vec<usize> = due.into_values().flatten().collect();
        routes.sort_unstable();
        self.total -= routes.len();
        Some(routes)
    }

    /// The earliest due minute, or `None` if empty.
    pub fn next_due(&self) -> Option<Minute> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued (minute, route) entries.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct due minutes currently queued.
    pub fn minute_count(&self) -> usize {
        self.inner.len()
    }
}
