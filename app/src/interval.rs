//! Recurring timers tied to the reactive owner that created them.
//!
//! Timers only start in the browser (effects never run during SSR) and are
//! cleared when the owner is cleaned up or the enclosing effect re-runs, so a
//! callback can never fire for a component that has gone away.

use core::time::Duration;

use leptos::logging;
use leptos::prelude::*;

/// Starts `tick` every `period` and clears it with the current owner. Call
/// from inside an effect.
pub fn schedule(period: Duration, tick: impl Fn() + 'static) {
    match set_interval_with_handle(tick, period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("Failed to schedule interval: {err:?}"),
    }
}

/// Runs `tick` every `period` for the lifetime of the calling component.
pub fn use_interval(period: Duration, tick: impl Fn() + Clone + 'static) {
    Effect::new(move || schedule(period, tick.clone()));
}

/// Next index of the three-dot loader.
#[must_use]
pub const fn next_dot(active: usize) -> usize {
    (active + 1) % 3
}

/// Next percentage of the progress loader: +5, back to 0 once 100 is reached.
#[must_use]
pub const fn next_progress(percent: u8) -> u8 {
    if percent >= 100 { 0 } else { percent + 5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_cycle_through_three() {
        assert_eq!(next_dot(0), 1);
        assert_eq!(next_dot(1), 2);
        assert_eq!(next_dot(2), 0);
    }

    #[test]
    fn progress_wraps_after_full() {
        let mut percent = 0;
        let mut seen = Vec::new();
        for _ in 0..22 {
            seen.push(percent);
            percent = next_progress(percent);
        }
        assert_eq!(seen[20], 100);
        assert_eq!(seen[21], 0);
        assert!(seen.iter().all(|p| *p <= 100 && p % 5 == 0));
    }
}
