//! Workspace error type.
//!
//! Sub-crates define their own error enums and convert `RosterError` into
//! them via `From` impls, so `?` works across layer boundaries.

use thiserror::Error;

/// The top-level error type for `roster-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `roster-*` crates.
pub type RosterResult<T> = Result<T, RosterError>;
