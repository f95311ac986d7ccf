//! Unit tests for roster-output.

use roster_assign::{AttemptOutcome, NoopObserver, assign_with_retries};
use roster_core::{Employee, EmployeeId, Minute, Route, RouteId, RosterConfig, Shift};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn route(id: u32, duration: u32, priority: f64, starts: &[Minute]) -> Route {
    let mut r = Route::new(RouteId(id), duration, 10.0, priority);
    for &t in starts {
        r.push_departure(t);
    }
    r
}

fn routes() -> Vec<Route> {
    vec![
        route(1, 40, 10.0, &[Minute::hm(6, 0), Minute::hm(7, 0)]),
        route(2, 30, 5.0, &[Minute::hm(15, 0)]),
    ]
}

fn crew() -> Vec<Employee> {
    vec![
        Employee::new(EmployeeId(1), "Ana", Shift::Morning),
        Employee::new(EmployeeId(2), "Ben", Shift::Evening),
    ]
}

fn config() -> RosterConfig {
    RosterConfig { jitter_max: 0.0, ..RosterConfig::default() }
}

/// Both shifts fully covered on the first attempt.
fn full_outcome() -> AttemptOutcome {
    assign_with_retries(&routes(), &crew(), &config(), &mut NoopObserver)
}

/// Two overlapping morning departures for one employee; never fully covered.
fn partial_routes() -> Vec<Route> {
    vec![
        route(1, 40, 5.0, &[Minute::hm(6, 0)]),
        route(2, 40, 5.0, &[Minute::hm(6, 20)]),
    ]
}

fn partial_outcome() -> AttemptOutcome {
    assign_with_retries(&partial_routes(), &crew()[..1], &config(), &mut NoopObserver)
}

fn rendered(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod export_tests {
    use super::*;
    use crate::export::{assignment_rows, coverage_rows, route_summary_rows};

    #[test]
    fn assignment_rows_follow_pool_order() {
        let out = full_outcome();
        let rows = assignment_rows(&out.schedule);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].employee_name, "Ana");
        assert_eq!(rows[0].start, Minute::hm(6, 0));
        assert_eq!(rows[0].duration_min(), 40);
        assert_eq!(rows[2].employee_id, EmployeeId(2));
        assert_eq!(rows[2].shift, Shift::Evening);
    }

    #[test]
    fn route_summaries_count_assigned() {
        let out = partial_outcome();
        let rows = route_summary_rows(&partial_routes(), &out.schedule);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().map(|r| r.departures).sum::<u32>(), 2);
        assert_eq!(rows.iter().map(|r| r.assigned).sum::<u32>(), 1);
    }

    #[test]
    fn route_without_departures_reads_full() {
        let empty = Route::new(RouteId(9), 30, 5.0, 1.0);
        let rows = route_summary_rows(&[empty], &full_outcome().schedule);
        assert_eq!(rows[0].departures, 0);
        assert_eq!(rows[0].coverage().percent(), 100.0);
    }

    #[test]
    fn coverage_rows_are_one_based() {
        let out = partial_outcome();
        let rows = coverage_rows(&out);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].attempt, 3);
        assert_eq!(rows[0].shift, Shift::Morning);
        assert_eq!((rows[0].assigned, rows[0].total), (1, 2));
        assert_eq!((rows[1].assigned, rows[1].total), (0, 0));
    }
}

// ── Text reports ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use roster_timetable::StaffingEstimate;

    use super::*;
    use crate::report::*;

    #[test]
    fn route_frequencies() {
        let r = vec![Route::new(RouteId(1), 40, 12.0, 10.0), Route::new(RouteId(3), 30, 8.0, 1.0)];
        let text = rendered(|out| render_route_frequencies(out, &r));
        assert!(text.contains("Route R1 (Priority 10): Every 10 minutes"));
        assert!(text.contains("Route R3 (Priority 1): Every 40 minutes"));
    }

    #[test]
    fn route_schedules_list_employee_and_coverage() {
        let out = full_outcome();
        let text = rendered(|w| render_route_schedules(w, &routes(), &out.schedule));
        assert!(text.contains("Route R1 Schedule (Priority: 10, Frequency: 10 minutes):"));
        assert!(text.contains("06:00      06:40      Ana             E1"));
        assert!(text.contains("15:00      15:30      Ben             E2"));
        assert!(text.contains("Departure coverage: 100.0% (2/2 departures)"));
        assert!(text.contains("Departure coverage: 100.0% (1/1 departures)"));
    }

    #[test]
    fn statistics_full() {
        let est = StaffingEstimate { morning: 1, evening: 1, ..Default::default() };
        let text = rendered(|w| render_statistics(w, &full_outcome(), &est));
        assert!(text.contains("Total Morning Routes: 2, Assigned: 2"));
        assert!(text.contains("Total Evening Routes: 1, Assigned: 1"));
        assert!(text.contains("Total Required Employees: Morning: 1, Evening: 1"));
        assert!(text.contains("All routes assigned: Yes"));
        assert!(!text.contains("Consider adding"));
    }

    #[test]
    fn statistics_partial() {
        let text = rendered(|w| render_statistics(w, &partial_outcome(), &StaffingEstimate::default()));
        assert!(text.contains("All routes assigned: No"));
        assert!(text.contains("Consider adding more employees"));
    }

    #[test]
    fn employee_schedules() {
        let text = rendered(|w| render_employee_schedules(w, &full_outcome().schedule));
        assert!(text.contains("Employee: Ana (E1) - morning shift"));
        assert!(text.contains("  Route distribution: R1(2)\n"));
        assert!(text.contains("  Total work time: 80 min (target 540 min)"));
        assert!(text.contains("  Route R1: 07:00 - 07:40"));
        assert!(text.contains("Employee: Ben (E2) - evening shift"));
    }

    #[test]
    fn text_report_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("schedule_output.txt");
        write_text_report(&path, &routes(), &full_outcome()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Route Information:\n"));
        assert!(text.contains("Route R2: Priority 5, Frequency every 26 minutes"));
        assert!(text.contains("  Total scheduled departures: 2"));
        assert!(text.contains("Total Evening Routes: 1, Assigned: 1"));
        assert!(text.contains("Employee: Ben (E2) - evening shift"));
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::export::export;
    use crate::observer::RosterOutputObserver;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("assignments.csv").exists());
        assert!(dir.path().join("route_summaries.csv").exists());
        assert!(dir.path().join("coverage.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["employee_id", "employee_name", "shift", "route_id", "start", "end", "duration_min"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join("coverage.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["attempt", "strategy", "shift", "assigned", "total", "coverage_pct"]);
    }

    #[test]
    fn export_writes_all_files() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        export(&mut w, &routes(), &full_outcome()).unwrap();

        let rows = records(&dir, "assignments.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "E1");
        assert_eq!(&rows[0][2], "morning");
        assert_eq!(&rows[0][3], "R1");
        assert_eq!(&rows[0][4], "06:00");
        assert_eq!(&rows[0][6], "40");

        let rows = records(&dir, "route_summaries.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "R2");
        assert_eq!(&rows[1][2], "26");
        assert_eq!(&rows[1][5], "100.0");

        let rows = records(&dir, "coverage.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "chronological");
    }

    #[test]
    fn observer_records_every_attempt() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = RosterOutputObserver::new(writer, &partial_routes());
        let out = assign_with_retries(&partial_routes(), &crew()[..1], &config(), &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Three attempts × two shifts.
        let rows = records(&dir, "coverage.csv");
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[4][0], "3");
        assert_eq!(&rows[4][5], "50.0");

        let rows = records(&dir, "assignments.csv");
        assert_eq!(rows.len(), out.schedule.total_assignments());
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_assignments(&[]).unwrap();
        w.write_route_summaries(&[]).unwrap();
        w.write_coverage(&[]).unwrap();
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::export::export;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("roster.db").exists());
    }

    #[test]
    fn sqlite_export_counts() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        export(&mut w, &routes(), &full_outcome()).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("roster.db")).unwrap();
        let count = |table: &str| -> i64 {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
                .unwrap()
        };
        assert_eq!(count("assignments"), 3);
        assert_eq!(count("route_summaries"), 2);
        assert_eq!(count("coverage"), 2);
    }

    #[test]
    fn sqlite_times_stored_as_minutes() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        export(&mut w, &routes(), &full_outcome()).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("roster.db")).unwrap();
        let (start, end): (i64, i64) = conn
            .query_row(
                "SELECT start_min, end_min FROM assignments WHERE route_id = 2",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!((start, end), (900, 930));
    }

    #[test]
    fn sqlite_rerun_replaces_previous_rows() {
        let dir = tmp();
        for _ in 0..2 {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            export(&mut w, &routes(), &full_outcome()).unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("roster.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM assignments", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
