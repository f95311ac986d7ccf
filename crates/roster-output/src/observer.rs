//! `RosterOutputObserver<W>` bridges `AssignObserver` to an `OutputWriter`.

use roster_assign::{AssignObserver, AttemptOutcome};
use roster_core::Route;

use crate::export::{assignment_rows, coverage_rows, route_summary_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`AssignObserver`] that writes the coverage of every attempt and the
/// final schedule to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `AssignObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct RosterOutputObserver<W: OutputWriter> {
    writer:     W,
    routes:     Vec<Route>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RosterOutputObserver<W> {
    /// Create an observer backed by `writer`.  `routes` supplies the
    /// per-route summary rows written at the end.
    pub fn new(writer: W, routes: &[Route]) -> Self {
        Self {
            writer,
            routes:     routes.to_vec(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_final(&mut self, outcome: &AttemptOutcome) -> OutputResult<()> {
        self.writer.write_assignments(&assignment_rows(&outcome.schedule))?;
        self.writer
            .write_route_summaries(&route_summary_rows(&self.routes, &outcome.schedule))?;
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> AssignObserver for RosterOutputObserver<W> {
    fn on_attempt_end(&mut self, outcome: &AttemptOutcome) {
        let result = self.writer.write_coverage(&coverage_rows(outcome));
        self.store_err(result);
    }

    fn on_finished(&mut self, outcome: &AttemptOutcome) {
        let result = self.write_final(outcome);
        self.store_err(result);
    }
}
