//! `roster-assign`: greedy crew assignment with strategy retries.
//!
//! # Attempt structure
//!
//! ```text
//! flatten_tasks(routes)            one DepartureTask per distinct departure
//! for attempt in 0..budget:
//!   strategy = Strategy::for_attempt(attempt)
//!   sort tasks by strategy (stable), split by shift
//!   per shift:
//!     ① First pass:  eligible = available and conflict-free;
//!                     lowest weighted score (+ jitter) wins.
//!     ② Second pass: deferred tasks by start time; least-worked
//!                     conflict-free employee wins, availability mark ignored.
//!   stop early once both shifts are fully covered
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`task`]     | `DepartureKey`, `DepartureTask`, `flatten_tasks`         |
//! | [`strategy`] | `Strategy`, `ScoreWeights`                               |
//! | [`crew`]     | `CrewState` (per-attempt availability and intervals)     |
//! | [`engine`]   | `run_attempt`                                            |
//! | [`schedule`] | `Schedule`, `EmployeeRoster`, `Coverage`, `AttemptOutcome` |
//! | [`retry`]    | `assign_with_retries`                                    |
//! | [`observer`] | `AssignObserver`, `NoopObserver`                         |
//! | [`builder`]  | `RosterBuilder`, `Roster`                                |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for key sets and route counts. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use roster_assign::{NoopObserver, RosterBuilder};
//! use roster_timetable::{plan_staffing, staff_pool};
//!
//! let (estimate, routes) = plan_staffing(routes, &config)?;
//! let crew = staff_pool(&estimate, &config);
//! let mut roster = RosterBuilder::new(config, routes, crew).build()?;
//! let outcome = roster.run(&mut NoopObserver);
//! assert!(outcome.coverage.is_full());
//! ```

pub mod builder;
pub mod crew;
pub mod engine;
pub mod error;
pub mod observer;
pub mod retry;
pub mod schedule;
pub mod strategy;
pub mod task;


#[cfg(feature = "fx-hash")]
pub(crate) type KeyMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type KeyMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type KeySet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type KeySet<K> = std::collections::HashSet<K>;

pub use builder::{Roster, RosterBuilder};
pub use crew::CrewState;
pub use engine::run_attempt;
pub use error::{AssignError, AssignResult};
pub use observer::{AssignObserver, NoopObserver};
pub use retry::assign_with_retries;
pub use schedule::{Assignment, AttemptOutcome, Coverage, EmployeeRoster, Schedule, ShiftCoverage};
pub use strategy::{ScoreWeights, Strategy};
pub use task::{DepartureKey, DepartureTask, flatten_tasks};
