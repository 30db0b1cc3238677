//! Repeat timing derived from the display frame rate.
//!
//! Intervals are expressed as ratios of the frame rate rather than
//! absolute milliseconds, each capped at a maximum frequency, so held
//! keys feel the same at 15, 30 or 60 FPS.
//!
//! | Keys        | Ratio | Cap   | Accel |
//! |-------------|-------|-------|-------|
//! | Up / Down   | 1.0   | 20 Hz | yes   |
//! | Left / Right| 0.6   | 12 Hz | no    |
//! | Page ± 1    | 0.4   | 8 Hz  | no    |

use crate::repeater::Repeater;

/// Frequency cap for value up/down repeats.
pub const UPDOWN_MAX_HZ: f32 = 20.0;
/// Frequency cap for focus navigation repeats.
pub const NAV_MAX_HZ: f32 = 12.0;
/// Frequency cap for page change repeats.
pub const PAGE_MAX_HZ: f32 = 8.0;

/// Input timing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Frame rate the editor loop runs at. Values below 1 are treated as 1.
    pub fps: f32,
    /// Hold time before auto-repeat starts, in seconds.
    pub first_delay_s: f32,
    pub updown_ratio: f32,
    pub nav_ratio: f32,
    pub page_ratio: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::for_fps(15.0)
    }
}

impl InputConfig {
    /// Default ratios and a 250 ms first delay at `fps`.
    pub fn for_fps(fps: f32) -> Self {
        Self {
            fps,
            first_delay_s: 0.25,
            updown_ratio: 1.0,
            nav_ratio: 0.6,
            page_ratio: 0.4,
        }
    }

    /// Whole-millisecond repeat interval for `ratio` of the frame rate,
    /// capped at `max_hz`.
    ///
    /// Returns `None` when the resulting rate is not positive, meaning
    /// the key never repeats.
    pub fn repeat_ms(&self, ratio: f32, max_hz: f32) -> Option<u32> {
        let hz = (self.fps.max(1.0) * ratio.max(0.0)).min(max_hz);
        if hz <= 0.0 || hz.is_nan() {
            #[cfg(feature = "defmt")]
            defmt::debug!("repeat disabled for ratio {}", ratio);
            return None;
        }
        Some(((1000.0 / hz) as u32).max(1))
    }

    /// Repeat interval in seconds; infinite when the key never repeats.
    pub fn repeat_s(&self, ratio: f32, max_hz: f32) -> f32 {
        self.repeat_ms(ratio, max_hz)
            .map_or(f32::INFINITY, |ms| ms as f32 / 1000.0)
    }

    fn first_delay(&self) -> f32 {
        // whole milliseconds, like the repeat intervals
        ((self.first_delay_s.max(0.0) * 1000.0) as u32) as f32 / 1000.0
    }

    /// Accelerating repeater for value up/down.
    pub fn updown_repeater(&self) -> Repeater {
        Repeater::new(
            self.first_delay(),
            self.repeat_s(self.updown_ratio, UPDOWN_MAX_HZ),
            true,
        )
    }

    /// Repeater for focus left/right.
    pub fn nav_repeater(&self) -> Repeater {
        Repeater::new(
            self.first_delay(),
            self.repeat_s(self.nav_ratio, NAV_MAX_HZ),
            false,
        )
    }

    /// Repeater for page previous/next.
    pub fn page_repeater(&self) -> Repeater {
        Repeater::new(
            self.first_delay(),
            self.repeat_s(self.page_ratio, PAGE_MAX_HZ),
            false,
        )
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
