//! Assignment observer trait for progress reporting and data collection.

use roster_core::Shift;

use crate::{AttemptOutcome, Strategy};

/// Callbacks invoked by [`assign_with_retries`][crate::assign_with_retries]
/// around each attempt.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: attempt printer
///
/// ```rust,ignore
/// struct AttemptPrinter;
///
/// impl AssignObserver for AttemptPrinter {
///     fn on_attempt_end(&mut self, outcome: &AttemptOutcome) {
///         println!("attempt {}: {:.1}%", outcome.attempt, outcome.coverage.combined().percent());
///     }
/// }
/// ```
pub trait AssignObserver {
    /// Called before an attempt sorts its tasks.
    fn on_attempt_start(&mut self, _attempt: u32, _strategy: Strategy) {}

    /// Called once per shift with the number of tasks the first pass deferred.
    fn on_second_pass(&mut self, _attempt: u32, _shift: Shift, _deferred: u32) {}

    /// Called after both shifts of an attempt are assigned.
    fn on_attempt_end(&mut self, _outcome: &AttemptOutcome) {}

    /// Called once with the outcome that will be returned.
    fn on_finished(&mut self, _outcome: &AttemptOutcome) {}
}

/// An [`AssignObserver`] that does nothing.
pub struct NoopObserver;

impl AssignObserver for NoopObserver {}
