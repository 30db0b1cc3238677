//! Error types for input sources.

use core::fmt;

/// Errors that can occur while polling an input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError<E> {
    /// The key scanner failed to report key state.
    Scan(E),
}

// Allow ergonomic `?` propagation from raw scanner errors.
impl<E> From<E> for InputError<E> {
    fn from(error: E) -> Self {
        InputError::Scan(error)
    }
}

impl<E: fmt::Debug> fmt::Display for InputError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Scan(e) => write!(f, "key scan error: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for InputError<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for InputError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            InputError::Scan(e) => defmt::write!(f, "key scan error: {}", e),
        }
    }
}
