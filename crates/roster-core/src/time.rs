//! Service-day time model.
//!
//! # Design
//!
//! Time is represented as a `Minute` counter measured from midnight at the
//! start of the service day.  Values of 1440 and above belong to the next
//! calendar day, so a service that runs 06:00 → 01:00 is simply the range
//! `360..1500`:
//!
//!   clock_time = minute mod 1440
//!
//! Using an integer minute as the canonical time unit means all timetable and
//! conflict arithmetic is exact, and rollover past midnight needs no special
//! case.  Conversion to `HH:MM` strings happens only at display boundaries.

use std::fmt;
use std::str::FromStr;

use crate::RosterError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1_440;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute minute within the service day (may exceed 1440 after midnight).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Minute(pub u32);

impl Minute {
    pub const MIDNIGHT: Minute = Minute(0);

    /// Build from an hour/minute pair.  `hours` may be ≥ 24 for next-day times.
    #[inline]
    pub const fn hm(hours: u32, minutes: u32) -> Minute {
        Minute(hours * 60 + minutes)
    }

    /// Return the minute `n` minutes after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Minute) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Hour of the (wrapped) clock day, `0..24`.
    #[inline]
    pub fn hour_of_day(self) -> u32 {
        (self.0 % MINUTES_PER_DAY) / 60
    }

    /// Minute past the hour, `0..60`.
    #[inline]
    pub fn minute_of_hour(self) -> u32 {
        self.0 % 60
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Minute) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour_of_day(), self.minute_of_hour())
    }
}

impl FromStr for Minute {
    type Err = RosterError;

    /// Parse `HH:MM` (24-hour clock, `00:00`–`23:59`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RosterError::Parse(format!("invalid time {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let h: u32 = h.parse().map_err(|_| bad())?;
        let m: u32 = m.parse().map_err(|_| bad())?;
        if h >= 24 || m >= 60 {
            return Err(bad());
        }
        Ok(Minute::hm(h, m))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Minute {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Minute {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── ServiceDay ────────────────────────────────────────────────────────────────

/// The half-open operating window `[start, end)` of one service day.
///
/// `ServiceDay` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ServiceDay {
    pub start: Minute,
    pub end:   Minute,
}

impl ServiceDay {
    /// Build from two clock times.  When `end_of_day` is not after
    /// `start_of_day` the service runs past midnight and a day is added to
    /// the end boundary.
    pub fn new(start_of_day: Minute, end_of_day: Minute) -> Self {
        let start = Minute(start_of_day.0 % MINUTES_PER_DAY);
        let mut end = Minute(end_of_day.0 % MINUTES_PER_DAY);
        if end <= start {
            end = end + MINUTES_PER_DAY;
        }
        Self { start, end }
    }

    /// Total operating minutes.
    #[inline]
    pub fn len_minutes(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, t: Minute) -> bool {
        self.start <= t && t < self.end
    }

    /// `true` if the service day rolls past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end.0 > MINUTES_PER_DAY
    }
}

impl fmt::Display for ServiceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)?;
        if self.wraps_midnight() {
            f.write_str(" (+1d)")?;
        }
        Ok(())
    }
}
