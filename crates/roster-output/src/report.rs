//! Human-readable roster reports.
//!
//! Each renderer writes to any `io::Write`, so the same text goes to the
//! console (`io::stdout().lock()`), to a file, or to a `Vec<u8>` in tests.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use roster_assign::{AttemptOutcome, Coverage, Schedule};
use roster_core::Route;
use roster_timetable::StaffingEstimate;

use crate::OutputResult;

/// `Route R1 (Priority 10): Every 10 minutes`, one line per route.
pub fn render_route_frequencies<W: Write>(out: &mut W, routes: &[Route]) -> io::Result<()> {
    writeln!(out, "Route Frequencies:")?;
    for route in routes {
        writeln!(
            out,
            "Route {} (Priority {}): Every {} minutes",
            route.id, route.priority, route.frequency_min
        )?;
    }
    Ok(())
}

/// Per-route departure table with the assigned employee, followed by the
/// route's coverage.
pub fn render_route_schedules<W: Write>(
    out:      &mut W,
    routes:   &[Route],
    schedule: &Schedule,
) -> io::Result<()> {
    writeln!(out, "\n===== ROUTE SCHEDULES =====")?;
    for route in routes {
        writeln!(
            out,
            "\nRoute {} Schedule (Priority: {}, Frequency: {} minutes):",
            route.id, route.priority, route.frequency_min
        )?;
        writeln!(out, "{:<10} {:<10} {:<15} {:<6}", "Start Time", "End Time", "Employee", "ID")?;
        writeln!(out, "{}", "-".repeat(45))?;

        let held = schedule.assignments_for_route(route.id);
        for (roster, a) in &held {
            writeln!(
                out,
                "{:<10} {:<10} {:<15} {:<6}",
                a.start.to_string(),
                a.end.to_string(),
                roster.name,
                roster.id.to_string(),
            )?;
        }

        let coverage = Coverage {
            assigned: held.len() as u32,
            total:    route.departures().len() as u32,
        };
        writeln!(out, "\nScheduled departures: {}", coverage.total)?;
        writeln!(out, "Covered departures: {}", coverage.assigned)?;
        writeln!(
            out,
            "Departure coverage: {:.1}% ({}/{} departures)",
            coverage.percent(),
            coverage.assigned,
            coverage.total
        )?;
    }
    Ok(())
}

/// Per-shift totals, required headcount and the overall verdict.
pub fn render_statistics<W: Write>(
    out:      &mut W,
    outcome:  &AttemptOutcome,
    estimate: &StaffingEstimate,
) -> io::Result<()> {
    let morning = outcome.coverage.morning;
    let evening = outcome.coverage.evening;

    writeln!(out, "\n===== ASSIGNMENT STATISTICS =====")?;
    writeln!(out, "Attempt {} ({})", outcome.attempt + 1, outcome.strategy)?;
    writeln!(out, "Total Morning Routes: {}, Assigned: {}", morning.total, morning.assigned)?;
    writeln!(out, "Total Evening Routes: {}, Assigned: {}", evening.total, evening.assigned)?;
    writeln!(
        out,
        "Total Required Employees: Morning: {}, Evening: {}",
        estimate.morning, estimate.evening
    )?;

    let full = outcome.coverage.is_full();
    writeln!(out, "\nAll routes assigned: {}", if full { "Yes" } else { "No" })?;
    if !full {
        writeln!(
            out,
            "Routes not fully assigned. Consider adding more employees or adjusting scheduling parameters."
        )?;
    }
    Ok(())
}

/// Every employee's shift, route distribution, work time and intervals.
pub fn render_employee_schedules<W: Write>(out: &mut W, schedule: &Schedule) -> io::Result<()> {
    for roster in schedule.iter() {
        writeln!(out, "\nEmployee: {} ({}) - {} shift", roster.name, roster.id, roster.shift)?;

        write!(out, "  Route distribution:")?;
        for (route, count) in roster.route_distribution() {
            write!(out, " {route}({count})")?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "  Total work time: {} min (target {} min)",
            roster.worked_minutes(),
            roster.target_minutes
        )?;
        for a in &roster.assignments {
            writeln!(out, "  Route {}: {} - {}", a.route, a.start, a.end)?;
        }
    }
    Ok(())
}

/// Write the plain-text summary file: route information, shift totals and
/// every employee's schedule.
pub fn write_text_report(
    path:    &Path,
    routes:  &[Route],
    outcome: &AttemptOutcome,
) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "Route Information:")?;
    for route in routes {
        writeln!(
            out,
            "Route {}: Priority {}, Frequency every {} minutes",
            route.id, route.priority, route.frequency_min
        )?;
        writeln!(out, "  Total scheduled departures: {}", route.departures().len())?;
    }
    writeln!(out)?;

    let morning = outcome.coverage.morning;
    let evening = outcome.coverage.evening;
    writeln!(out, "Total Morning Routes: {}, Assigned: {}", morning.total, morning.assigned)?;
    writeln!(out, "Total Evening Routes: {}, Assigned: {}", evening.total, evening.assigned)?;

    render_employee_schedules(&mut out, &outcome.schedule)?;
    out.flush()?;
    Ok(())
}
