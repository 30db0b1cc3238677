//! Editor session state: pages, parameter values, cursor, and dirty mask.
//!
//! # Architecture
//!
//! An [`Effect`] owns an ordered list of [`Page`]s, each laying out one to
//! three controls in a fixed row of [`TILES_PER_PAGE`] tiles. Parameter
//! values live in a single [`ParamStore`] shared by every page, so a
//! control may appear on more than one page.
//!
//! ```text
//! Page 0 (MAIN):  [Rate]   [Mode]   [Sync]
//! Page 1 (MOD):   [Wave]   [Filter] [Tone]
//! Page 2 (TUNE):  [Detune] [---Empty---] [---Empty---]
//! ```
//!
//! # Change Tracking
//!
//! Every mutation reports the screen regions it invalidated as a
//! [`DirtyMask`]. The controller returns the mask for one event; the
//! effect also accumulates a pending mask that the render loop drains
//! with [`Effect::take_dirty()`].
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Pages, parameters, and UI scratch state use
//! fixed-capacity `heapless` containers sized by the constants below.
//! The optional `defmt` feature enables structured logging for embedded
//! targets.

mod dirty;
mod effect;
mod error;
mod page;
mod store;
mod value;

pub use dirty::DirtyMask;
pub use effect::Effect;
pub use error::ModelError;
pub use page::{Page, TileSlot};
pub use store::ParamStore;
pub use value::ParamValue;

/// Tiles in one page row.
pub const TILES_PER_PAGE: usize = 3;

/// Maximum pages in one effect.
pub const MAX_PAGES: usize = 8;

/// Maximum distinct parameter keys. Must be a power of two.
pub const MAX_PARAMS: usize = 32;

/// Maximum entries in the per-control UI scratch map. Must be a power of two.
pub const MAX_UI_SCRATCH: usize = 8;
