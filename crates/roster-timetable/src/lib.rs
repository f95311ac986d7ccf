//! `roster-timetable`: departure timetables, staffing estimates, and CSV
//! input loading.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`peak`]       | `tick_len`, `adjusted_headway`                            |
//! | [`due_queue`]  | `DueQueue` (`BTreeMap<Minute, Vec<route index>>`)         |
//! | [`generator`]  | `generate_timetable`, `generate_from`, `TimetableSummary` |
//! | [`staffing`]   | `estimate_staffing`, `plan_staffing`, `staff_pool`        |
//! | [`loader`]     | route and employee CSV loaders                            |
//! | [`error`]      | `TimetableError`, `TimetableResult<T>`                    |
//!
//! # Pipeline (summary)
//!
//! ```text
//! routes ──generate_timetable──▶ routes with departures
//!        ──estimate_staffing──▶ StaffingEstimate { morning, evening }
//!        ──staff_pool────────▶ Vec<Employee> for roster-assign
//! ```

pub mod due_queue;
pub mod error;
pub mod generator;
pub mod loader;
pub mod peak;
pub mod staffing;


pub use due_queue::DueQueue;
pub use error::{TimetableError, TimetableResult};
pub use generator::{TimetableSummary, generate_from, generate_timetable};
pub use loader::{load_employees_csv, load_employees_reader, load_routes_csv, load_routes_reader};
pub use staffing::{StaffingEstimate, estimate_staffing, plan_staffing, staff_pool};
