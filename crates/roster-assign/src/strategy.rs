//! Task orderings and first-pass scoring weights.
//!
//! Each attempt pairs one sort order with one weight preset:
//!
//! | Index | Strategy            | Sort key                          | Weights (work, variety) |
//! |-------|---------------------|-----------------------------------|-------------------------|
//! | 0     | `Chronological`     | start                             | (1.0, 2.0)              |
//! | 1     | `PriorityFirst`     | priority desc, start              | (0.5, 1.0)              |
//! | 2     | `SparseRoutesFirst` | route departure count asc, start  | (2.0, 0.5)              |

use std::fmt;

use crate::DepartureTask;

/// Multipliers applied to the two first-pass score terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreWeights {
    pub work_time: f64,
    pub variety:   f64,
}

impl ScoreWeights {
    /// `work_time * (worked / 10) + variety * 20 * route_count + jitter`.
    ///
    /// Lower is better.
    #[inline]
    pub fn score(&self, worked_min: u64, route_count: u32, jitter: f64) -> f64 {
        self.work_time * (worked_min as f64 / 10.0)
            + self.variety * 20.0 * route_count as f64
            + jitter
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Chronological,
    PriorityFirst,
    SparseRoutesFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] =
        [Strategy::Chronological, Strategy::PriorityFirst, Strategy::SparseRoutesFirst];

    /// Strategies cycle when the retry budget exceeds three.
    pub fn for_attempt(attempt: u32) -> Strategy {
        Self::ALL[attempt as usize % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Strategy::Chronological => 0,
            Strategy::PriorityFirst => 1,
            Strategy::SparseRoutesFirst => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Chronological => "chronological",
            Strategy::PriorityFirst => "priority-first",
            Strategy::SparseRoutesFirst => "sparse-routes-first",
        }
    }

    pub fn weights(self) -> ScoreWeights {
        match self {
            Strategy::Chronological => ScoreWeights { work_time: 1.0, variety: 2.0 },
            Strategy::PriorityFirst => ScoreWeights { work_time: 0.5, variety: 1.0 },
            Strategy::SparseRoutesFirst => ScoreWeights { work_time: 2.0, variety: 0.5 },
        }
    }

    /// Stable in-place sort of `tasks` by this strategy's key.
    pub fn sort_tasks(self, tasks: &mut [DepartureTask]) {
        match self {
            Strategy::Chronological => tasks.sort_by_key(|t| t.start()),
            Strategy::PriorityFirst => tasks.sort_by(|a, b| {
                b.priority
                    .total_cmp(&a.priority)
                    .then_with(|| a.start().cmp(&b.start()))
            }),
            Strategy::SparseRoutesFirst => {
                tasks.sort_by_key(|t| (t.route_departures, t.start()))
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
