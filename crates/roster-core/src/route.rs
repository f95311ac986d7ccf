//! Transit routes and their priority-derived base frequency.

use crate::{Minute, RouteId};

/// Lowest accepted priority; smaller inputs are clamped up to it.
pub const MIN_PRIORITY: f64 = 1.0;
/// Highest accepted priority; larger inputs are clamped down to it.
pub const MAX_PRIORITY: f64 = 10.0;

/// Headway at `MIN_PRIORITY`, in minutes.
const SLOWEST_HEADWAY_MIN: f64 = 40.0;
/// Headway at `MAX_PRIORITY`, in minutes.
const FASTEST_HEADWAY_MIN: f64 = 10.0;

/// Base departure spacing in whole minutes for a priority.
///
/// Linear map 1 → 40, 10 → 10, truncated toward zero.  Out-of-range and NaN
/// priorities are clamped to `[1, 10]` first.
pub fn frequency_for(priority: f64) -> u32 {
    let p = clamp_priority(priority);
    let span = SLOWEST_HEADWAY_MIN - FASTEST_HEADWAY_MIN;
    // Normalise before scaling: 8.8 must give exactly 14, not 13.999…
    let headway = SLOWEST_HEADWAY_MIN - (p - MIN_PRIORITY) / (MAX_PRIORITY - MIN_PRIORITY) * span;
    headway as u32
}

/// Clamp a raw priority into `[1, 10]`.  NaN maps to the lowest priority.
pub fn clamp_priority(priority: f64) -> f64 {
    if priority.is_nan() {
        return MIN_PRIORITY;
    }
    priority.clamp(MIN_PRIORITY, MAX_PRIORITY)
}

/// One transit route plus the timetable generated for it.
///
/// The static fields come from the input collaborator.  `departures` and
/// `last_departure` are owned by the timetable generator and cleared at the
/// start of every generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id: RouteId,
    /// Estimated end-to-end travel time in minutes; one departure occupies a
    /// crew member for this long.
    pub duration_min: u32,
    /// Route length (informational, carried through to reports).
    pub length: f64,
    /// Average stop priority, already clamped to `[1, 10]`.
    pub priority: f64,
    /// Base headway derived from `priority`.
    pub frequency_min: u32,

    departures: Vec<Minute>,
    last_departure: Option<Minute>,
}

impl Route {
    pub fn new(id: RouteId, duration_min: u32, length: f64, priority: f64) -> Self {
        let priority = clamp_priority(priority);
        Self {
            id,
            duration_min,
            length,
            priority,
            frequency_min: frequency_for(priority),
            departures: Vec::new(),
            last_departure: None,
        }
    }

    /// The generated timetable, ascending.
    pub fn departures(&self) -> &[Minute] {
        &self.departures
    }

    pub fn last_departure(&self) -> Option<Minute> {
        self.last_departure
    }

    /// Forget any previously generated timetable.
    pub fn reset_timetable(&mut self) {
        self.departures.clear();
        self.last_departure = None;
    }

    /// Append a departure.  Callers must push in non-decreasing order.
    pub fn push_departure(&mut self, t: Minute) {
        debug_assert!(
            self.last_departure.is_none_or(|last| last <= t),
            "departures must be pushed in chronological order"
        );
        self.departures.push(t);
        self.last_departure = Some(t);
    }

    /// Total crew minutes this route's timetable consumes.
    pub fn workload_minutes(&self) -> u64 {
        self.departures.len() as u64 * self.duration_min as u64
    }
}
