//! Page/control model and event controller for a tiled effect-editor panel.
//!
//! The crate is split into three layers:
//!
//! - [`controls`]: stateless widgets (dial, button, switch, selectors)
//!   that read and write one parameter each.
//! - [`model`]: pages, the parameter store, the editor session
//!   ([`model::Effect`]) and the [`model::DirtyMask`].
//! - [`controller`]: folds [`controller::UiEvent`]s into an effect and
//!   reports which screen regions went stale.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and `defmt::Format` derives.

#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod controls;
pub mod model;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use controller::{apply_batch, apply_event, Applied, UiEvent};
pub use controls::{Control, ControlKind};
pub use model::{DirtyMask, Effect, ModelError, Page, ParamStore, ParamValue};
