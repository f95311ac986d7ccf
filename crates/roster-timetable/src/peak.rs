//! Peak-window rules for tick sizing and headway discounts.
//!
//! Two independent questions are asked of the configured windows at each
//! generator tick:
//!
//! - **How long is this tick?**  Half the spacing of the matching window, or
//!   `base_tick_min` outside all windows.  With overlapping windows the last
//!   configured match decides.
//! - **How soon is a route due again?**  Inside any window the route's base
//!   headway is multiplied by `peak_factor` (truncated to whole minutes).
//!   Every headway is floored at `min_spacing_min`.

use roster_core::{Minute, RosterConfig};

/// Generator tick length starting at `now`.
pub fn tick_len(config: &RosterConfig, now: Minute) -> u32 {
    config
        .peak_windows
        .iter()
        .rev()
        .find(|w| w.contains(now))
        .map(|w| w.tick_min())
        .unwrap_or(config.base_tick_min)
}

/// Minutes until a route with base headway `frequency_min` is due again,
/// having departed at `now`.
pub fn adjusted_headway(config: &RosterConfig, frequency_min: u32, now: Minute) -> u32 {
    let headway = if config.peak_at(now).is_some() {
        (frequency_min as f64 * config.peak_factor) as u32
    } else {
        frequency_min
    };
    headway.max(config.min_spacing_min)
}
