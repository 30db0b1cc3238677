use core::fmt;

/// Errors raised while building or addressing the editor model.
///
/// Everything except [`StoreFull`](ModelError::StoreFull) is a static
/// layout mistake and is reported at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModelError {
    /// A page was built with no controls.
    EmptyPage,
    /// A page was given more than [`TILES_PER_PAGE`](super::TILES_PER_PAGE) controls.
    TooManyControls,
    /// An effect was built with an empty page list.
    NoPages,
    /// An effect was given more than [`MAX_PAGES`](super::MAX_PAGES) pages.
    TooManyPages,
    /// A switch was declared with more than three positions.
    TooManySwitchOptions,
    /// Page index is out of bounds (must be < number of pages).
    InvalidPageIndex,
    /// The parameter store has no room for another key.
    StoreFull,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyPage => write!(f, "page has no controls"),
            ModelError::TooManyControls => write!(f, "page has more than 3 controls"),
            ModelError::NoPages => write!(f, "effect has no pages"),
            ModelError::TooManyPages => write!(f, "effect has too many pages"),
            ModelError::TooManySwitchOptions => write!(f, "switch has more than 3 positions"),
            ModelError::InvalidPageIndex => write!(f, "page index out of bounds"),
            ModelError::StoreFull => write!(f, "parameter store is full"),
        }
    }
}

impl core::error::Error for ModelError {}
