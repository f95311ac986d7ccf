//! Fluent builder for constructing a [`Roster`].

use roster_core::{Employee, Route, RosterConfig};

use crate::{AssignError, AssignObserver, AssignResult, AttemptOutcome, KeySet, assign_with_retries};

/// Fluent builder for [`Roster`].
///
/// # Required inputs
///
/// - [`RosterConfig`]: retry budget, seed, jitter bound, service day, …
/// - routes whose timetables are already generated (see
///   `roster_timetable::generate_timetable`)
/// - the crew pool, each employee tagged with a shift
///
/// # Optional overrides
///
/// | Method              | Default               |
/// |---------------------|-----------------------|
/// | `.seed(s)`          | `config.seed`         |
/// | `.max_retries(n)`   | `config.max_retries`  |
/// | `.jitter_max(x)`    | `config.jitter_max`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut roster = RosterBuilder::new(config, routes, crew)
///     .seed(7)
///     .build()?;
/// let outcome = roster.run(&mut NoopObserver);
/// ```
pub struct RosterBuilder {
    config:    RosterConfig,
    routes:    Vec<Route>,
    employees: Vec<Employee>,
}

impl RosterBuilder {
    pub fn new(config: RosterConfig, routes: Vec<Route>, employees: Vec<Employee>) -> Self {
        Self { config, routes, employees }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn max_retries(mut self, attempts: u32) -> Self {
        self.config.max_retries = attempts;
        self
    }

    /// Upper bound of the first-pass tie-break jitter; `0.0` disables it.
    pub fn jitter_max(mut self, max: f64) -> Self {
        self.config.jitter_max = max;
        self
    }

    /// Validate the configuration and reject duplicate route or employee ids.
    pub fn build(self) -> AssignResult<Roster> {
        self.config.validate()?;

        let mut route_ids = KeySet::default();
        for route in &self.routes {
            if !route_ids.insert(route.id) {
                return Err(AssignError::DuplicateRoute(route.id));
            }
        }

        let mut employee_ids = KeySet::default();
        for employee in &self.employees {
            if !employee_ids.insert(employee.id) {
                return Err(AssignError::DuplicateEmployee(employee.id));
            }
        }

        if self.employees.iter().any(|e| e.target_minutes == 0) {
            return Err(AssignError::Config("employee target minutes must be > 0".into()));
        }

        Ok(Roster {
            config:    self.config,
            routes:    self.routes,
            employees: self.employees,
        })
    }
}

/// Validated assignment inputs, ready to run.
pub struct Roster {
    config:    RosterConfig,
    routes:    Vec<Route>,
    employees: Vec<Employee>,
}

impl Roster {
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Run the retry loop.  Repeated calls return identical outcomes.
    pub fn run<O: AssignObserver>(&mut self, observer: &mut O) -> AttemptOutcome {
        assign_with_retries(&self.routes, &self.employees, &self.config, observer)
    }
}
