//! Rotary encoder position tracking.
//!
//! Encoder hardware reports an absolute, free-running position counter.
//! [`EncoderTracker`] keeps the last reading as a baseline and turns each
//! new reading into a signed [`UiEvent::ValueDelta`].

use fxpanel::UiEvent;

/// Converts absolute encoder positions into value deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderTracker {
    baseline: i32,
}

impl EncoderTracker {
    /// Start tracking from the position read at startup so the first
    /// delta is measured from the real hardware state.
    pub fn new(initial_position: i32) -> Self {
        Self {
            baseline: initial_position,
        }
    }

    pub fn baseline(&self) -> i32 {
        self.baseline
    }

    /// Delta since the previous reading. The baseline always moves to
    /// `position`, even when the delta is zero.
    pub fn delta(&mut self, position: i32) -> i32 {
        let delta = position.wrapping_sub(self.baseline);
        self.baseline = position;
        delta
    }

    /// Event for a new reading, or `None` when the encoder did not move.
    pub fn update(&mut self, position: i32) -> Option<UiEvent> {
        match self.delta(position) {
            0 => None,
            delta => {
                #[cfg(feature = "defmt")]
                defmt::trace!("encoder: delta={}, position={}", delta, position);
                Some(UiEvent::ValueDelta(delta))
            }
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
