//! Input handling for the fxpanel editor.
//!
//! Raw key state and encoder positions go in, ordered
//! [`UiEvent`](fxpanel::UiEvent) batches come out:
//!
//! - [`Repeater`]: per-key debounce, auto-repeat and acceleration driven
//!   by frame time.
//! - [`InputConfig`]: repeat timing derived from the frame rate.
//! - [`KeypadInput`]: an [`InputSource`] over any [`KeyScanner`].
//! - [`EncoderTracker`]: absolute encoder positions to value deltas.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and `defmt::Format` derives.

#![cfg_attr(not(test), no_std)]

pub mod encoder;
pub mod error;
pub mod keypad;
pub mod repeater;
pub mod source;
pub mod timing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use encoder::EncoderTracker;
pub use error::InputError;
pub use keypad::{Key, KeyScanner, KeyState, KeypadInput};
pub use repeater::Repeater;
pub use source::{EventBatch, InputSource, MAX_EVENTS_PER_TICK};
pub use timing::InputConfig;
