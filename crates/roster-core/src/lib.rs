//! `roster-core`: foundational types for the `crew_roster` workspace.
//!
//! This crate is a dependency of every other `roster-*` crate.  It has no
//! `roster-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RouteId`, `EmployeeId`                               |
//! | [`time`]        | `Minute`, `ServiceDay`                                |
//! | [`rng`]         | `RosterRng` (seedable tie-break jitter)               |
//! | [`shift`]       | `Shift` enum and shift-window classification          |
//! | [`route`]       | `Route`, priority → frequency mapping                 |
//! | [`employee`]    | `Employee` input record                               |
//! | [`config`]      | `RosterConfig`, `PeakWindow`                          |
//! | [`error`]       | `RosterError`, `RosterResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and input types.  |

pub mod config;
pub mod employee;
pub mod error;
pub mod ids;
pub mod rng;
pub mod route;
pub mod shift;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PeakWindow, RosterConfig};
pub use employee::Employee;
pub use error::{RosterError, RosterResult};
pub use ids::{EmployeeId, RouteId};
pub use rng::RosterRng;
pub use route::{Route, clamp_priority, frequency_for};
pub use shift::Shift;
pub use time::{MINUTES_PER_DAY, Minute, ServiceDay};
