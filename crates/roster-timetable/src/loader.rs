//! CSV loaders for routes and crew.
//!
//! # Route CSV format
//!
//! One row per route.  `route_id` accepts either the prefixed form or a bare
//! integer.  Priorities outside `[1, 10]` are clamped, not rejected.
//!
//! ```csv
//! route_id,duration_min,length,priority
//! R1,40,12,10
//! R2,40,18,5
//! R3,30,8,1
//! ```
//!
//! # Employee CSV format
//!
//! `target_minutes` is optional; an empty cell uses the default (540).
//!
//! ```csv
//! employee_id,name,shift,target_minutes
//! E1,Ana,morning,
//! E2,Ben,evening,480
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use roster_core::{Employee, EmployeeId, Route, RouteId, Shift};

use crate::TimetableError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route_id:     String,
    duration_min: u32,
    length:       f64,
    priority:     f64,
}

#[derive(Deserialize)]
struct EmployeeRecord {
    employee_id:    String,
    name:           String,
    shift:          String,
    #[serde(default)]
    target_minutes: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load routes from a CSV file, in file order.
pub fn load_routes_csv(path: &Path) -> Result<Vec<Route>, TimetableError> {
    let file = std::fs::File::open(path).map_err(TimetableError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<Vec<Route>, TimetableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut routes = Vec::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| TimetableError::Parse(e.to_string()))?;
        let id: RouteId = row.route_id.parse()?;
        routes.push(Route::new(id, row.duration_min, row.length, row.priority));
    }

    Ok(routes)
}

/// Load the crew pool from a CSV file, in file order.
pub fn load_employees_csv(path: &Path) -> Result<Vec<Employee>, TimetableError> {
    let file = std::fs::File::open(path).map_err(TimetableError::Io)?;
    load_employees_reader(file)
}

/// Like [`load_employees_csv`] but accepts any `Read` source.
pub fn load_employees_reader<R: Read>(reader: R) -> Result<Vec<Employee>, TimetableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut employees = Vec::new();

    for result in csv_reader.deserialize::<EmployeeRecord>() {
        let row = result.map_err(|e| TimetableError::Parse(e.to_string()))?;
        let id: EmployeeId = row.employee_id.parse()?;
        let shift: Shift = row.shift.parse()?;
        let mut employee = Employee::new(id, row.name, shift);
        if let Some(target) = row.target_minutes {
            employee = employee.with_target(target);
        }
        employees.push(employee);
    }

    Ok(employees)
}
