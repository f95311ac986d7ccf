//! Departure timetable generation.
//!
//! # Tick model
//!
//! A clock walks the service day from `start` to the (possibly next-day)
//! end of service in variable-length ticks:
//!
//! ```text
//! now = start
//! while now < end:
//!   for each route due at or before now (input order):
//!     record departure at now
//!     due[route] = now + adjusted_headway(route, now)
//!   now += tick_len(now)
//! ```
//!
//! Departures therefore always land on tick boundaries, and a route that
//! becomes due between two ticks leaves on the next one.  All routes due on
//! the same tick are evaluated at the same simulated instant.

use roster_core::{Minute, Route, RosterConfig, ServiceDay};

use crate::peak::{adjusted_headway, tick_len};
use crate::{DueQueue, TimetableResult};

/// What one generation run produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimetableSummary {
    pub service_day: ServiceDay,
    /// Generator ticks walked.
    pub ticks: usize,
    /// Departures recorded across all routes.
    pub departures: usize,
}

/// Generate the day's timetable for `routes`, starting at
/// `config.service_start`.
///
/// Any previously generated departures on the routes are discarded.
pub fn generate_timetable(
    routes: &mut [Route],
    config: &RosterConfig,
) -> TimetableResult<TimetableSummary> {
    generate_from(routes, config, config.service_start)
}

/// Like [`generate_timetable`] but with an explicit start-of-day clock time.
pub fn generate_from(
    routes: &mut [Route],
    config: &RosterConfig,
    start_of_day: Minute,
) -> TimetableResult<TimetableSummary> {
    config.validate()?;
    let service_day = ServiceDay::new(start_of_day, config.service_end);

    for route in routes.iter_mut() {
        route.reset_timetable();
    }

    let mut queue = DueQueue::all_due_at(routes.len(), service_day.start);
    let mut now = service_day.start;
    let mut ticks = 0usize;
    let mut departures = 0usize;

    while now < service_day.end {
        if let Some(due) = queue.drain_due(now) {
            for idx in due {
                let route = &mut routes[idx];
                route.push_departure(now);
                departures += 1;
                queue.push(now + adjusted_headway(config, route.frequency_min, now), idx);
            }
        }
        now = now + tick_len(config, now);
        ticks += 1;
    }

    log::debug!(
        "generated {departures} departures for {} routes over {service_day} ({ticks} ticks)",
        routes.len()
    );

    Ok(TimetableSummary { service_day, ticks, departures })
}
