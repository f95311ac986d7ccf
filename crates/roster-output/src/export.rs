//! Conversion from assignment outcomes to output rows.

use roster_assign::{AttemptOutcome, Schedule};
use roster_core::{Route, Shift};

use crate::writer::OutputWriter;
use crate::{AssignmentRow, CoverageRow, OutputResult, RouteSummaryRow};

/// One row per held departure, employees in crew-pool order.
pub fn assignment_rows(schedule: &Schedule) -> Vec<AssignmentRow> {
    schedule
        .iter()
        .flat_map(|roster| {
            roster.assignments.iter().map(move |a| AssignmentRow {
                employee_id:   roster.id,
                employee_name: roster.name.clone(),
                shift:         roster.shift,
                route_id:      a.route,
                start:         a.start,
                end:           a.end,
            })
        })
        .collect()
}

/// One row per route, in input order.
pub fn route_summary_rows(routes: &[Route], schedule: &Schedule) -> Vec<RouteSummaryRow> {
    routes
        .iter()
        .map(|route| RouteSummaryRow {
            route_id:      route.id,
            priority:      route.priority,
            frequency_min: route.frequency_min,
            departures:    route.departures().len() as u32,
            assigned:      schedule.assignments_for_route(route.id).len() as u32,
        })
        .collect()
}

/// Morning and evening coverage of `outcome`.
pub fn coverage_rows(outcome: &AttemptOutcome) -> Vec<CoverageRow> {
    Shift::ALL
        .iter()
        .map(|&shift| {
            let c = outcome.coverage.get(shift);
            CoverageRow {
                attempt:  outcome.attempt + 1,
                strategy: outcome.strategy,
                shift,
                assigned: c.assigned,
                total:    c.total,
            }
        })
        .collect()
}

/// Write every row of a finished outcome to `writer`, then finish it.
pub fn export<W: OutputWriter>(
    writer:  &mut W,
    routes:  &[Route],
    outcome: &AttemptOutcome,
) -> OutputResult<()> {
    writer.write_assignments(&assignment_rows(&outcome.schedule))?;
    writer.write_route_summaries(&route_summary_rows(routes, &outcome.schedule))?;
    writer.write_coverage(&coverage_rows(outcome))?;
    writer.finish()
}
