//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `assignments.csv`
//! - `route_summaries.csv`
//! - `coverage.csv`
//!
//! Ids are written in prefixed form (`E1`, `R1`) and times as `HH:MM`, with
//! next-day times wrapped.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, CoverageRow, OutputResult, RouteSummaryRow};

/// Writes roster output to three CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    routes:      Writer<File>,
    coverage:    Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record([
            "employee_id", "employee_name", "shift", "route_id", "start", "end", "duration_min",
        ])?;

        let mut routes = Writer::from_path(dir.join("route_summaries.csv"))?;
        routes.write_record([
            "route_id", "priority", "frequency_min", "departures", "assigned", "coverage_pct",
        ])?;

        let mut coverage = Writer::from_path(dir.join("coverage.csv"))?;
        coverage.write_record(["attempt", "strategy", "shift", "assigned", "total", "coverage_pct"])?;

        Ok(Self {
            assignments,
            routes,
            coverage,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.employee_id.to_string(),
                row.employee_name.clone(),
                row.shift.to_string(),
                row.route_id.to_string(),
                row.start.to_string(),
                row.end.to_string(),
                row.duration_min().to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_route_summaries(&mut self, rows: &[RouteSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.routes.write_record(&[
                row.route_id.to_string(),
                row.priority.to_string(),
                row.frequency_min.to_string(),
                row.departures.to_string(),
                row.assigned.to_string(),
                format!("{:.1}", row.coverage().percent()),
            ])?;
        }
        Ok(())
    }

    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        for row in rows {
            self.coverage.write_record(&[
                row.attempt.to_string(),
                row.strategy.to_string(),
                row.shift.to_string(),
                row.assigned.to_string(),
                row.total.to_string(),
                format!("{:.1}", row.coverage().percent()),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.routes.flush()?;
        self.coverage.flush()?;
        Ok(())
    }
}
