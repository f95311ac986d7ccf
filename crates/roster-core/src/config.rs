//! Top-level roster configuration.
//!
//! Every tunable constant of the pipeline lives here.  `Default` reproduces
//! the depot's production values; applications typically load overrides from
//! a JSON file (feature `serde`) and call [`RosterConfig::validate`] before
//! handing the config to the timetable generator.

use crate::{Minute, RosterError, RosterResult, ServiceDay};
use crate::employee::DEFAULT_TARGET_MINUTES;

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A time-of-day band in which departures run closer together.
///
/// Membership is by hour of day: a minute `t` is inside when
/// `start_hour <= t.hour_of_day() < end_hour`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    pub start_hour: u32,
    pub end_hour:   u32,
    /// Minimum spacing the window is designed for; the generator's tick
    /// inside the window is half of this.
    pub min_spacing_min: u32,
}

impl PeakWindow {
    pub const fn new(start_hour: u32, end_hour: u32, min_spacing_min: u32) -> Self {
        Self { start_hour, end_hour, min_spacing_min }
    }

    #[inline]
    pub fn contains(&self, t: Minute) -> bool {
        let h = t.hour_of_day();
        self.start_hour <= h && h < self.end_hour
    }

    /// Generator tick length while inside this window.
    #[inline]
    pub fn tick_min(&self) -> u32 {
        self.min_spacing_min / 2
    }
}

// ── RosterConfig ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterConfig {
    /// Clock time of the first possible departure.  Default 06:00.
    pub service_start: Minute,

    /// Clock time service stops; earlier than `service_start` means the
    /// service runs past midnight.  Default 01:00.
    pub service_end: Minute,

    /// Peak bands.  Default: 08–10 and 17–20, both with 30-minute spacing.
    pub peak_windows: Vec<PeakWindow>,

    /// Generator tick outside peak windows, in minutes.  Default 10.
    pub base_tick_min: u32,

    /// Headway multiplier applied to departures inside a peak window.
    /// Default 0.7.
    pub peak_factor: f64,

    /// Floor for any headway, in minutes.  Default 10.
    pub min_spacing_min: u32,

    /// Minutes of driving one employee is expected to cover.  Default 420.
    pub required_work_min: u32,

    /// Fraction of `required_work_min` used as the staffing divisor; 0.9
    /// overstaffs by roughly 10 %.  Default 0.9.
    pub staffing_buffer: f64,

    /// Target minutes given to generated employees.  Default 540.
    pub target_work_min: u32,

    /// Assignment attempts before settling for partial coverage.  Default 3.
    pub max_retries: u32,

    /// Master RNG seed.  The same seed always produces an identical roster.
    pub seed: u64,

    /// Upper bound of the first-pass tie-break jitter.  0 disables it.
    /// Default 5.0.
    pub jitter_max: f64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            service_start:     Minute::hm(6, 0),
            service_end:       Minute::hm(1, 0),
            peak_windows:      vec![PeakWindow::new(8, 10, 30), PeakWindow::new(17, 20, 30)],
            base_tick_min:     10,
            peak_factor:       0.7,
            min_spacing_min:   10,
            required_work_min: 420,
            staffing_buffer:   0.9,
            target_work_min:   DEFAULT_TARGET_MINUTES,
            max_retries:       3,
            seed:              0,
            jitter_max:        5.0,
        }
    }
}

impl RosterConfig {
    /// The service day described by `service_start`/`service_end`.
    pub fn service_day(&self) -> ServiceDay {
        ServiceDay::new(self.service_start, self.service_end)
    }

    /// First peak window containing `t`, if any.
    pub fn peak_at(&self, t: Minute) -> Option<&PeakWindow> {
        self.peak_windows.iter().find(|w| w.contains(t))
    }

    /// Effective staffing divisor in minutes (`required_work_min * buffer`).
    pub fn staffing_divisor(&self) -> f64 {
        self.required_work_min as f64 * self.staffing_buffer
    }

    /// Check internal consistency.  Returns the first problem found.
    pub fn validate(&self) -> RosterResult<()> {
        if self.base_tick_min == 0 {
            return Err(RosterError::Config("base_tick_min must be > 0".into()));
        }
        if self.min_spacing_min == 0 {
            return Err(RosterError::Config("min_spacing_min must be > 0".into()));
        }
        if !(self.peak_factor > 0.0 && self.peak_factor <= 1.0) {
            return Err(RosterError::Config(format!(
                "peak_factor must be in (0, 1], got {}",
                self.peak_factor
            )));
        }
        if !(self.staffing_buffer > 0.0 && self.staffing_buffer <= 1.0) {
            return Err(RosterError::Config(format!(
                "staffing_buffer must be in (0, 1], got {}",
                self.staffing_buffer
            )));
        }
        if self.required_work_min == 0 {
            return Err(RosterError::Config("required_work_min must be > 0".into()));
        }
        if !(self.jitter_max >= 0.0 && self.jitter_max.is_finite()) {
            return Err(RosterError::Config(format!(
                "jitter_max must be a finite value >= 0, got {}",
                self.jitter_max
            )));
        }
        for w in &self.peak_windows {
            if w.start_hour >= w.end_hour || w.end_hour > 24 {
                return Err(RosterError::Config(format!(
                    "peak window {}–{} h is empty or exceeds 24 h",
                    w.start_hour, w.end_hour
                )));
            }
            if w.tick_min() == 0 {
                return Err(RosterError::Config(format!(
                    "peak window {}–{} h: min_spacing_min {} gives a zero-length tick",
                    w.start_hour, w.end_hour, w.min_spacing_min
                )));
            }
        }
        Ok(())
    }
}
