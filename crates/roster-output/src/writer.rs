//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AssignmentRow, CoverageRow, OutputResult, RouteSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write a batch of employee-departure assignments.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Write per-route departure and coverage totals.
    fn write_route_summaries(&mut self, rows: &[RouteSummaryRow]) -> OutputResult<()>;

    /// Write per-shift coverage for one or more attempts.
    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
