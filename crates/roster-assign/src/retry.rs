//! Strategy retry loop.

use roster_core::{Employee, Route, RosterConfig, RosterRng};

use crate::{AssignObserver, AttemptOutcome, Strategy, flatten_tasks, run_attempt};

/// Assign `employees` to every departure of `routes`, retrying with the next
/// strategy until both shifts are fully covered or `config.max_retries`
/// attempts have run.
///
/// Returns the first fully covered attempt, or the last attempt when none
/// is.  A budget of 0 still runs one attempt.  Each attempt's jitter stream is
/// a child of `RosterRng::new(config.seed)`, so the result depends only on
/// the inputs and the seed.
pub fn assign_with_retries<O: AssignObserver>(
    routes:    &[Route],
    employees: &[Employee],
    config:    &RosterConfig,
    observer:  &mut O,
) -> AttemptOutcome {
    let tasks = flatten_tasks(routes);
    let budget = config.max_retries.max(1);
    let mut root = RosterRng::new(config.seed);

    let mut attempt = 0;
    loop {
        let strategy = Strategy::for_attempt(attempt);
        observer.on_attempt_start(attempt, strategy);

        let mut rng = root.child(attempt as u64);
        let outcome =
            run_attempt(attempt, strategy, &tasks, employees, config, &mut rng, observer);
        observer.on_attempt_end(&outcome);

        let combined = outcome.coverage.combined();
        log::info!(
            "attempt {} ({}): {}/{} departures assigned ({:.1}%)",
            attempt + 1,
            strategy,
            combined.assigned,
            combined.total,
            combined.percent(),
        );

        attempt += 1;
        if outcome.coverage.is_full() {
            observer.on_finished(&outcome);
            return outcome;
        }
        if attempt >= budget {
            log::warn!(
                "retry budget of {budget} exhausted; {} departures left unassigned",
                combined.unassigned(),
            );
            observer.on_finished(&outcome);
            return outcome;
        }
    }
}
