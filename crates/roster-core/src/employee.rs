//! Crew members as supplied by the input collaborator.
//!
//! `Employee` is the immutable input record.  The mutable per-run fields
//! (accumulated minutes, available-after) live in `roster_assign::CrewState`,
//! which is rebuilt from scratch for every assignment attempt.

use crate::{EmployeeId, Shift};

/// Default daily work-time target per employee, in minutes (9 h).
pub const DEFAULT_TARGET_MINUTES: u32 = 540;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    pub id:    EmployeeId,
    pub name:  String,
    pub shift: Shift,
    /// Work-time target used when reporting utilisation.
    pub target_minutes: u32,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, shift: Shift) -> Self {
        Self {
            id,
            name: name.into(),
            shift,
            target_minutes: DEFAULT_TARGET_MINUTES,
        }
    }

    pub fn with_target(mut self, minutes: u32) -> Self {
        self.target_minutes = minutes;
        self
    }
}
