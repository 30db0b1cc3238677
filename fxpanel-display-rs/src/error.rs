//! Error types for the canvas adapters.

use core::fmt;

/// A drawing operation the backend rejected.
///
/// Canvas adapters record faults instead of returning them: a redraw
/// always runs to completion so the screen is never left half painted.
/// Callers poll [`EgCanvas::take_fault()`](crate::EgCanvas::take_fault)
/// after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasFault {
    /// The draw target returned an error for at least one primitive.
    Draw,
}

impl fmt::Display for CanvasFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CanvasFault::Draw => write!(f, "draw target rejected a primitive"),
        }
    }
}

impl core::error::Error for CanvasFault {}

#[cfg(feature = "defmt")]
impl defmt::Format for CanvasFault {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CanvasFault::Draw => defmt::write!(f, "Draw target error"),
        }
    }
}
