//! `roster-output`: reports and export writers for crew roster outcomes.
//!
//! Two export backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                           |
//! |-----------|---------|---------------------------------------------------------|
//! | *(none)*  | CSV     | `assignments.csv`, `route_summaries.csv`, `coverage.csv` |
//! | `sqlite`  | SQLite  | `roster.db`                                             |
//!
//! Both implement [`OutputWriter`].  Rows come either from [`export`] (one
//! finished outcome) or from [`RosterOutputObserver`], which records the
//! coverage of every attempt while `assign_with_retries` runs and the final
//! schedule when it returns.
//!
//! The [`report`] module renders the human-readable console and text-file
//! views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster_output::{CsvWriter, RosterOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RosterOutputObserver::new(writer, roster.routes());
//! let outcome = roster.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{assignment_rows, coverage_rows, export, route_summary_rows};
pub use observer::RosterOutputObserver;
pub use report::{
    render_employee_schedules, render_route_frequencies, render_route_schedules,
    render_statistics, write_text_report,
};
pub use row::{AssignmentRow, CoverageRow, RouteSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
