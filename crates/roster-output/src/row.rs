//! Plain data row types written by output backends.

use roster_assign::{Coverage, Strategy};
use roster_core::{EmployeeId, Minute, RouteId, Shift};

/// One departure held by one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub employee_id:   EmployeeId,
    pub employee_name: String,
    pub shift:         Shift,
    pub route_id:      RouteId,
    pub start:         Minute,
    pub end:           Minute,
}

impl AssignmentRow {
    pub fn duration_min(&self) -> u32 {
        self.end.since(self.start)
    }
}

/// Departure and coverage totals for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummaryRow {
    pub route_id:      RouteId,
    pub priority:      f64,
    pub frequency_min: u32,
    pub departures:    u32,
    pub assigned:      u32,
}

impl RouteSummaryRow {
    pub fn coverage(&self) -> Coverage {
        Coverage { assigned: self.assigned, total: self.departures }
    }
}

/// Coverage of one shift in one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRow {
    /// One-based, as reported in logs.
    pub attempt:  u32,
    pub strategy: Strategy,
    pub shift:    Shift,
    pub assigned: u32,
    pub total:    u32,
}

impl CoverageRow {
    pub fn coverage(&self) -> Coverage {
        Coverage { assigned: self.assigned, total: self.total }
    }
}
