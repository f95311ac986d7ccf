//! Shift enum shared by the staffing estimator and the assignment engine.
//!
//! The service day is split into two disjoint staffing pools by the hour a
//! departure leaves: morning covers `[06:00, 14:00)`, evening covers
//! everything else (including the small hours after midnight).

use std::str::FromStr;

use crate::{Minute, RosterError};

/// Start hour (inclusive) of the morning window.
pub const MORNING_START_HOUR: u32 = 6;
/// End hour (exclusive) of the morning window; also the evening shift start.
pub const MORNING_END_HOUR: u32 = 14;

/// The staffing pool an employee belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    /// Both shifts in reporting order.
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Evening];

    /// The shift responsible for a departure leaving at `t`.
    #[inline]
    pub fn for_departure(t: Minute) -> Shift {
        let h = t.hour_of_day();
        if (MORNING_START_HOUR..MORNING_END_HOUR).contains(&h) {
            Shift::Morning
        } else {
            Shift::Evening
        }
    }

    /// Nominal clock time at which the shift's crew becomes available.
    pub fn nominal_start(self) -> Minute {
        match self {
            Shift::Morning => Minute::hm(MORNING_START_HOUR, 0),
            Shift::Evening => Minute::hm(MORNING_END_HOUR, 0),
        }
    }

    /// Availability floor for the shift within a service day starting at
    /// `service_start`.
    ///
    /// A service opening before 06:00 produces pre-dawn evening departures,
    /// so both pools become available from the service start in that case.
    pub fn start_within(self, service_start: Minute) -> Minute {
        if service_start < Shift::Morning.nominal_start() {
            service_start
        } else {
            self.nominal_start()
        }
    }

    /// Lower-case label, used in CSV columns and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Evening => "evening",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Shift::Morning),
            "evening" => Ok(Shift::Evening),
            other => Err(RosterError::Parse(format!(
                "invalid shift {other:?}: expected \"morning\" or \"evening\""
            ))),
        }
    }
}
