//! Departure tasks, the unit of work the engine hands to crew members.

use std::fmt;

use roster_core::{Minute, Route, RouteId, Shift};

use crate::{KeyMap, KeySet};

/// Unique identity of one departure: route plus start minute.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct DepartureKey {
    pub route: RouteId,
    pub start: Minute,
}

impl fmt::Display for DepartureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.route, self.start)
    }
}

/// One departure flattened out of a route's timetable.
#[derive(Clone, Debug, PartialEq)]
pub struct DepartureTask {
    pub key:      DepartureKey,
    pub end:      Minute,
    pub duration: u32,
    /// Copied from the route; drives the priority-first ordering.
    pub priority: f64,
    /// Distinct departures of the owning route across the whole day; drives
    /// the sparse-routes-first ordering.
    pub route_departures: usize,
}

impl DepartureTask {
    #[inline]
    pub fn route(&self) -> RouteId {
        self.key.route
    }

    #[inline]
    pub fn start(&self) -> Minute {
        self.key.start
    }

    /// The shift whose crew covers this departure.
    #[inline]
    pub fn shift(&self) -> Shift {
        Shift::for_departure(self.key.start)
    }

    /// `true` unless the two intervals are disjoint:
    /// `!(self.end <= start || self.start >= end)`.
    #[inline]
    pub fn overlaps(&self, start: Minute, end: Minute) -> bool {
        !(self.end <= start || self.start() >= end)
    }
}

/// Flatten every route's departures into tasks, in route-then-time order.
///
/// Duplicate keys (the same route listed twice, or a repeated departure) are
/// kept only once.
pub fn flatten_tasks(routes: &[Route]) -> Vec<DepartureTask> {
    let mut seen: KeySet<DepartureKey> = KeySet::default();
    let mut tasks = Vec::with_capacity(routes.iter().map(|r| r.departures().len()).sum());

    for route in routes {
        for &start in route.departures() {
            let key = DepartureKey { route: route.id, start };
            if !seen.insert(key) {
                continue;
            }
            tasks.push(DepartureTask {
                key,
                end: start + route.duration_min,
                duration: route.duration_min,
                priority: route.priority,
                route_departures: 0,
            });
        }
    }

    let mut per_route: KeyMap<RouteId, usize> = KeyMap::default();
    for task in &tasks {
        *per_route.entry(task.route()).or_default() += 1;
    }
    for task in &mut tasks {
        task.route_departures = per_route[&task.route()];
    }
    tasks
}
