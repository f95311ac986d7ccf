use roster_core::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("timetable input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] RosterError),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
