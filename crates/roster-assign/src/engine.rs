//! A single assignment attempt.

use roster_core::{Employee, RosterConfig, RosterRng, Shift};

use crate::{
    AssignObserver, AttemptOutcome, Coverage, CrewState, DepartureTask, Schedule, ScoreWeights,
    ShiftCoverage, Strategy,
};

/// Run one attempt with `strategy` over `tasks`.
///
/// `tasks` must already be deduplicated (see [`flatten_tasks`][crate::flatten_tasks]).
/// Each shift is assigned independently from the employees tagged with it;
/// all crew state is fresh, so attempts never influence each other except
/// through `rng`.
pub fn run_attempt<O: AssignObserver>(
    attempt:   u32,
    strategy:  Strategy,
    tasks:     &[DepartureTask],
    employees: &[Employee],
    config:    &RosterConfig,
    rng:       &mut RosterRng,
    observer:  &mut O,
) -> AttemptOutcome {
    let mut sorted = tasks.to_vec();
    strategy.sort_tasks(&mut sorted);

    // Timetables may start earlier than `config.service_start` (see
    // `generate_from`); the earliest departure lowers the shift floors too.
    let day_start = sorted
        .iter()
        .map(|t| t.start())
        .min()
        .map_or(config.service_start, |first| first.min(config.service_start));

    let mut crews: Vec<Option<CrewState>> = (0..employees.len()).map(|_| None).collect();
    let mut coverage = ShiftCoverage::default();
    let mut deferred = 0;

    for shift in Shift::ALL {
        let shift_tasks: Vec<&DepartureTask> =
            sorted.iter().filter(|t| t.shift() == shift).collect();
        let members: Vec<usize> = employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.shift == shift)
            .map(|(i, _)| i)
            .collect();

        let shift_start = shift.start_within(day_start);
        let mut states: Vec<CrewState> =
            members.iter().map(|&i| CrewState::new(&employees[i], shift_start)).collect();

        let result = assign_shift(
            &shift_tasks,
            &mut states,
            strategy.weights(),
            config.jitter_max,
            rng,
        );
        log::debug!(
            "attempt {} {shift}: {}/{} assigned, {} deferred to second pass",
            attempt + 1,
            result.coverage.assigned,
            result.coverage.total,
            result.deferred,
        );
        observer.on_second_pass(attempt, shift, result.deferred);
        coverage.set(shift, result.coverage);
        deferred += result.deferred;

        for (state, &i) in states.into_iter().zip(&members) {
            crews[i] = Some(state);
        }
    }

    // Every employee belongs to exactly one shift, so every slot is filled.
    let rosters = crews
        .into_iter()
        .zip(employees)
        .filter_map(|(state, e)| state.map(|s| s.into_roster(e)))
        .collect();

    AttemptOutcome {
        attempt,
        strategy,
        schedule: Schedule::new(rosters),
        coverage,
        deferred,
    }
}

struct ShiftResult {
    coverage: Coverage,
    deferred: u32,
}

fn assign_shift(
    tasks:      &[&DepartureTask],
    crew:       &mut [CrewState],
    weights:    ScoreWeights,
    jitter_max: f64,
    rng:        &mut RosterRng,
) -> ShiftResult {
    let mut assigned = 0u32;
    let mut leftovers: Vec<&DepartureTask> = Vec::new();

    // ── First pass: weighted score ────────────────────────────────────────
    for &task in tasks {
        let mut best: Option<(usize, f64)> = None;
        for (i, state) in crew.iter().enumerate() {
            if !state.is_available_at(task.start()) || state.conflicts(task) {
                continue;
            }
            let score = weights.score(
                state.worked_minutes(),
                state.route_count(task.route()),
                rng.jitter(jitter_max),
            );
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((i, score));
            }
        }

        match best {
            Some((i, _)) => {
                crew[i].assign(task, true);
                assigned += 1;
            }
            None => leftovers.push(task),
        }
    }

    let deferred = leftovers.len() as u32;

    // ── Second pass: least-worked conflict-free employee ─────────────────
    leftovers.sort_by_key(|t| t.start());
    for task in leftovers {
        let mut order: Vec<usize> = (0..crew.len()).collect();
        order.sort_by_key(|&i| crew[i].worked_minutes());

        let pick = order
            .into_iter()
            .find(|&i| crew[i].within_shift(task.start()) && !crew[i].conflicts(task));
        if let Some(i) = pick {
            crew[i].assign(task, false);
            assigned += 1;
        }
    }

    ShiftResult {
        coverage: Coverage { assigned, total: tasks.len() as u32 },
        deferred,
    }
}
