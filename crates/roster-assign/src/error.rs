use roster_core::{EmployeeId, RosterError, RouteId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("assignment configuration error: {0}")]
    Config(String),

    #[error("route {0} appears more than once in the route list")]
    DuplicateRoute(RouteId),

    #[error("employee {0} appears more than once in the crew pool")]
    DuplicateEmployee(EmployeeId),

    #[error(transparent)]
    Core(#[from] RosterError),
}

pub type AssignResult<T> = Result<T, AssignError>;
