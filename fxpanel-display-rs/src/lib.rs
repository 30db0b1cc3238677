//! Editor screen renderer for the fxpanel control surface (240×280 RGB565).
//!
//! Rendering is split into three layers:
//!
//! - [`layout`]: pure geometry computed from a [`Theme`].
//! - [`tiles`] and [`screen`]: composition against the [`Canvas`] trait,
//!   driven by the effect's [`DirtyMask`](fxpanel::DirtyMask).
//! - [`EgCanvas`]: the [`Canvas`] implementation over any
//!   embedded-graphics `DrawTarget<Color = Rgb565>`.
//!
//! # Quick Start
//!
//! ```ignore
//! use fxpanel_display::{render_editor, EgCanvas, Theme};
//!
//! let theme = Theme::default();
//! let mut canvas = EgCanvas::new(framebuffer);
//!
//! // once per tick, after the controller has applied input:
//! let dirty = fx.take_dirty();
//! render_editor(&mut canvas, &fx, &theme, dirty);
//! if let Some(fault) = canvas.take_fault() {
//!     // report and carry on
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod eg_canvas;
pub mod error;
pub mod layout;
pub mod screen;
pub mod theme;
pub mod tiles;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use canvas::{Canvas, FontKey, Paint};
pub use eg_canvas::EgCanvas;
pub use error::CanvasFault;
pub use screen::{render_editor, render_full};
pub use theme::{Palette, Theme};
