//! Per-attempt mutable state for one crew member.

use roster_core::{Employee, EmployeeId, Minute, RouteId};

use crate::{Assignment, DepartureTask, EmployeeRoster, KeyMap};

/// Availability, workload and held intervals of one employee during a single
/// attempt.  Recreated from the [`Employee`] at the start of every attempt.
///
/// `intervals` is kept sorted by `(start, end)`.  Since held intervals are
/// pairwise non-overlapping, their ends are non-decreasing in that order,
/// which lets [`conflicts`](Self::conflicts) inspect a single neighbour.
#[derive(Clone, Debug)]
pub struct CrewState {
    pub employee:    EmployeeId,
    pub shift_start: Minute,
    available_after: Minute,
    worked_min:      u64,
    route_counts:    KeyMap<RouteId, u32>,
    intervals:       Vec<Assignment>,
}

impl CrewState {
    pub fn new(employee: &Employee, shift_start: Minute) -> Self {
        Self {
            employee: employee.id,
            shift_start,
            available_after: shift_start,
            worked_min: 0,
            route_counts: KeyMap::default(),
            intervals: Vec::new(),
        }
    }

    #[inline]
    pub fn available_after(&self) -> Minute {
        self.available_after
    }

    #[inline]
    pub fn worked_minutes(&self) -> u64 {
        self.worked_min
    }

    #[inline]
    pub fn route_count(&self, route: RouteId) -> u32 {
        self.route_counts.get(&route).copied().unwrap_or(0)
    }

    pub fn intervals(&self) -> &[Assignment] {
        &self.intervals
    }

    /// First-pass eligibility: the rolling availability mark allows `start`.
    #[inline]
    pub fn is_available_at(&self, start: Minute) -> bool {
        start >= self.available_after
    }

    /// Second-pass eligibility: `start` is not before the shift start.
    #[inline]
    pub fn within_shift(&self, start: Minute) -> bool {
        start >= self.shift_start
    }

    /// `true` if `task` overlaps any held interval.
    pub fn conflicts(&self, task: &DepartureTask) -> bool {
        // Intervals starting at or after task.end cannot overlap; of the rest,
        // the last one has the latest end.
        let p = self.intervals.partition_point(|iv| iv.start < task.end);
        p > 0 && self.intervals[p - 1].end > task.start()
    }

    /// Record `task` as held.  The first pass moves the availability mark to
    /// `task.end`; the second pass leaves it alone.
    pub fn assign(&mut self, task: &DepartureTask, advance_availability: bool) {
        let held = Assignment { start: task.start(), end: task.end, route: task.route() };
        let at = self.intervals.partition_point(|iv| (iv.start, iv.end) <= (held.start, held.end));
        self.intervals.insert(at, held);

        self.worked_min += task.duration as u64;
        *self.route_counts.entry(task.route()).or_insert(0) += 1;
        if advance_availability {
            self.available_after = task.end;
        }
    }

    /// Finish the attempt, producing the employee's roster.
    pub fn into_roster(self, employee: &Employee) -> EmployeeRoster {
        EmployeeRoster {
            id:             employee.id,
            name:           employee.name.clone(),
            shift:          employee.shift,
            target_minutes: employee.target_minutes,
            assignments:    self.intervals,
        }
    }
}
