//! Attempt results: per-employee rosters and coverage counts.

use std::collections::BTreeMap;

use roster_core::{EmployeeId, Minute, RouteId, Shift};

use crate::{DepartureKey, Strategy};

/// One departure held by one employee.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Assignment {
    pub start: Minute,
    pub end:   Minute,
    pub route: RouteId,
}

impl Assignment {
    #[inline]
    pub fn key(&self) -> DepartureKey {
        DepartureKey { route: self.route, start: self.start }
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.end.since(self.start)
    }
}

/// An employee's finished roster, intervals ordered by start time.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeRoster {
    pub id:             EmployeeId,
    pub name:           String,
    pub shift:          Shift,
    pub target_minutes: u32,
    pub assignments:    Vec<Assignment>,
}

impl EmployeeRoster {
    pub fn worked_minutes(&self) -> u64 {
        self.assignments.iter().map(|a| a.duration() as u64).sum()
    }

    /// Number of departures held on each route.
    pub fn route_distribution(&self) -> BTreeMap<RouteId, u32> {
        let mut dist = BTreeMap::new();
        for a in &self.assignments {
            *dist.entry(a.route).or_insert(0) += 1;
        }
        dist
    }
}

/// Every employee's roster, in crew-pool order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    rosters: Vec<EmployeeRoster>,
}

impl Schedule {
    pub fn new(rosters: Vec<EmployeeRoster>) -> Self {
        Self { rosters }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRoster> {
        self.rosters.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRoster> {
        self.rosters.iter()
    }

    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }

    pub fn total_assignments(&self) -> usize {
        self.rosters.iter().map(|r| r.assignments.len()).sum()
    }

    /// All assignments on `route`, ordered by start, with their holder.
    pub fn assignments_for_route(&self, route: RouteId) -> Vec<(&EmployeeRoster, &Assignment)> {
        let mut out: Vec<_> = self
            .rosters
            .iter()
            .flat_map(|r| r.assignments.iter().map(move |a| (r, a)))
            .filter(|(_, a)| a.route == route)
            .collect();
        out.sort_by_key(|(_, a)| a.start);
        out
    }

    /// The employee holding departure `key`, if any.
    pub fn assignee_of(&self, key: DepartureKey) -> Option<&EmployeeRoster> {
        self.rosters
            .iter()
            .find(|r| r.assignments.iter().any(|a| a.key() == key))
    }
}

/// Assigned versus total departures.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    pub assigned: u32,
    pub total:    u32,
}

impl Coverage {
    pub fn is_full(&self) -> bool {
        self.assigned == self.total
    }

    pub fn unassigned(&self) -> u32 {
        self.total - self.assigned
    }

    /// Percentage covered; an empty shift counts as 100 %.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.assigned as f64 * 100.0 / self.total as f64
        }
    }
}

impl std::ops::Add for Coverage {
    type Output = Coverage;

    fn add(self, rhs: Coverage) -> Coverage {
        Coverage {
            assigned: self.assigned + rhs.assigned,
            total:    self.total + rhs.total,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftCoverage {
    pub morning: Coverage,
    pub evening: Coverage,
}

impl ShiftCoverage {
    pub fn get(&self, shift: Shift) -> Coverage {
        match shift {
            Shift::Morning => self.morning,
            Shift::Evening => self.evening,
        }
    }

    pub(crate) fn set(&mut self, shift: Shift, coverage: Coverage) {
        match shift {
            Shift::Morning => self.morning = coverage,
            Shift::Evening => self.evening = coverage,
        }
    }

    /// Both shifts fully covered.
    pub fn is_full(&self) -> bool {
        self.morning.is_full() && self.evening.is_full()
    }

    pub fn combined(&self) -> Coverage {
        self.morning + self.evening
    }
}

/// Everything one assignment attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptOutcome {
    /// Zero-based attempt number.
    pub attempt:  u32,
    pub strategy: Strategy,
    pub schedule: Schedule,
    pub coverage: ShiftCoverage,
    /// Tasks the first pass could not place, across both shifts.
    pub deferred: u32,
}
