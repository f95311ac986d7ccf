//! depot: three-route example for the crew_roster workspace.
//!
//! Builds the timetable for one depot's routes, sizes the crew from it,
//! assigns every departure, prints the route and employee reports, and
//! writes CSV exports plus `schedule_output.txt` to `output/depot/`.
//!
//! Usage: `depot [config.json]`.  The optional JSON file overrides any
//! subset of `RosterConfig` fields, e.g. `{"seed": 7, "max_retries": 5}`.
//! Set `RUST_LOG=info` (or `debug`) to see per-attempt progress.

use std::io::{self, Cursor, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use roster_assign::RosterBuilder;
use roster_core::RosterConfig;
use roster_output::{
    CsvWriter, RosterOutputObserver, render_employee_schedules, render_route_frequencies,
    render_route_schedules, render_statistics, write_text_report,
};
use roster_timetable::{load_routes_reader, plan_staffing, staff_pool};

const OUTPUT_DIR: &str = "output/depot";

// ── Route CSV ─────────────────────────────────────────────────────────────────

// R1 is the trunk line (every 10 min), R3 a low-demand feeder (every 40 min).
const ROUTES_CSV: &str = "\
route_id,duration_min,length,priority\n\
R1,40,12,10\n\
R2,40,18,5\n\
R3,30,8,1\n\
";

fn load_config() -> Result<RosterConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => RosterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    println!("=== depot: crew roster ===");
    println!(
        "Service: {}  |  Retries: {}  |  Seed: {}",
        config.service_day(),
        config.max_retries,
        config.seed
    );
    println!();

    let mut stdout = io::stdout().lock();

    // 1. Routes.
    let routes = load_routes_reader(Cursor::new(ROUTES_CSV))?;
    render_route_frequencies(&mut stdout, &routes)?;

    // 2. Timetable and staffing.
    let (estimate, routes) = plan_staffing(routes, &config)?;
    writeln!(
        stdout,
        "Adjusted required employees: Morning: {}, Evening: {}",
        estimate.morning, estimate.evening
    )?;
    let crew = staff_pool(&estimate, &config);

    // 3. Assignment.
    let mut roster = RosterBuilder::new(config, routes, crew).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = RosterOutputObserver::new(writer, roster.routes());

    let t0 = Instant::now();
    let outcome = roster.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    log::info!("assignment finished in {:.3} s", elapsed.as_secs_f64());

    // 4. Reports.
    render_route_schedules(&mut stdout, roster.routes(), &outcome.schedule)?;
    render_statistics(&mut stdout, &outcome, &estimate)?;
    render_employee_schedules(&mut stdout, &outcome.schedule)?;

    let report_path = Path::new(OUTPUT_DIR).join("schedule_output.txt");
    write_text_report(&report_path, roster.routes(), &outcome)?;

    writeln!(stdout)?;
    writeln!(stdout, "Detailed schedule saved to {}", report_path.display())?;
    writeln!(stdout, "CSV exports written to {OUTPUT_DIR}/")?;
    Ok(())
}
