//! Required-headcount estimation per shift.
//!
//! Every departure is charged to the shift that owns its start time (see
//! [`Shift::for_departure`]).  Headcount per shift is
//!
//! ```text
//! ceil(shift_minutes / (required_work_min * staffing_buffer))
//! ```
//!
//! With the default 420-minute requirement and 0.9 buffer the divisor is
//! 378 minutes, i.e. roughly 10 % more crew than a perfect packing needs.

use roster_core::{Employee, EmployeeId, Route, RosterConfig, Shift};

use crate::{TimetableResult, generate_timetable};

/// Crew minutes and required headcount for each shift.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffingEstimate {
    pub morning: u32,
    pub evening: u32,
    pub morning_minutes: u64,
    pub evening_minutes: u64,
}

impl StaffingEstimate {
    pub fn headcount(&self, shift: Shift) -> u32 {
        match shift {
            Shift::Morning => self.morning,
            Shift::Evening => self.evening,
        }
    }

    pub fn minutes(&self, shift: Shift) -> u64 {
        match shift {
            Shift::Morning => self.morning_minutes,
            Shift::Evening => self.evening_minutes,
        }
    }

    pub fn total_headcount(&self) -> u32 {
        self.morning + self.evening
    }
}

/// Estimate headcount from routes whose timetables are already generated.
pub fn estimate_staffing(routes: &[Route], config: &RosterConfig) -> StaffingEstimate {
    let mut est = StaffingEstimate::default();
    for route in routes {
        for &t in route.departures() {
            match Shift::for_departure(t) {
                Shift::Morning => est.morning_minutes += route.duration_min as u64,
                Shift::Evening => est.evening_minutes += route.duration_min as u64,
            }
        }
    }

    let divisor = config.staffing_divisor();
    est.morning = headcount_for(est.morning_minutes, divisor);
    est.evening = headcount_for(est.evening_minutes, divisor);
    est
}

/// Generate the timetable, then estimate headcount from it.
///
/// Returns the estimate together with the routes carrying the timetable that
/// was used.
pub fn plan_staffing(
    mut routes: Vec<Route>,
    config: &RosterConfig,
) -> TimetableResult<(StaffingEstimate, Vec<Route>)> {
    let summary = generate_timetable(&mut routes, config)?;
    let est = estimate_staffing(&routes, config);
    log::info!(
        "staffing for {} departures: morning {} ({} min), evening {} ({} min)",
        summary.departures,
        est.morning,
        est.morning_minutes,
        est.evening,
        est.evening_minutes,
    );
    Ok((est, routes))
}

/// Build a crew pool sized by `est`: `E1..En` named `Employee n`, the first
/// `est.morning` of them on the morning shift.
pub fn staff_pool(est: &StaffingEstimate, config: &RosterConfig) -> Vec<Employee> {
    (1..=est.total_headcount())
        .map(|n| {
            let shift = if n <= est.morning { Shift::Morning } else { Shift::Evening };
            Employee::new(EmployeeId(n), format!("Employee {n}"), shift)
                .with_target(config.target_work_min)
        })
        .collect()
}

fn headcount_for(minutes: u64, divisor: f64) -> u32 {
    if minutes == 0 {
        return 0;
    }
    (minutes as f64 / divisor).ceil() as u32
}
