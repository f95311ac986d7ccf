//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `roster.db` file in the configured output directory with
//! three tables: `assignments`, `route_summaries` and `coverage`.  Times are
//! stored as minutes since the service-day midnight (values ≥ 1440 fall on
//! the next day).

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, CoverageRow, OutputResult, RouteSummaryRow};

/// Writes roster output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `roster.db` in `dir` and initialise the schema.
    ///
    /// Rows from a previous run into the same directory are cleared.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("roster.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS assignments (
                 employee_id   INTEGER NOT NULL,
                 employee_name TEXT    NOT NULL,
                 shift         TEXT    NOT NULL,
                 route_id      INTEGER NOT NULL,
                 start_min     INTEGER NOT NULL,
                 end_min       INTEGER NOT NULL,
                 PRIMARY KEY (route_id, start_min)
             );
             CREATE TABLE IF NOT EXISTS route_summaries (
                 route_id      INTEGER PRIMARY KEY,
                 priority      REAL    NOT NULL,
                 frequency_min INTEGER NOT NULL,
                 departures    INTEGER NOT NULL,
                 assigned      INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS coverage (
                 attempt  INTEGER NOT NULL,
                 strategy TEXT    NOT NULL,
                 shift    TEXT    NOT NULL,
                 assigned INTEGER NOT NULL,
                 total    INTEGER NOT NULL,
                 PRIMARY KEY (attempt, shift)
             );
             DELETE FROM assignments;
             DELETE FROM route_summaries;
             DELETE FROM coverage;
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO assignments \
                 (employee_id, employee_name, shift, route_id, start_min, end_min) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.employee_id.get(),
                    row.employee_name,
                    row.shift.as_str(),
                    row.route_id.get(),
                    row.start.0,
                    row.end.0,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_route_summaries(&mut self, rows: &[RouteSummaryRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO route_summaries \
                 (route_id, priority, frequency_min, departures, assigned) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.route_id.get(),
                    row.priority,
                    row.frequency_min,
                    row.departures,
                    row.assigned,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO coverage (attempt, strategy, shift, assigned, total) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    row.attempt,
                    row.strategy.name(),
                    row.shift.as_str(),
                    row.assigned,
                    row.total,
                ],
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
