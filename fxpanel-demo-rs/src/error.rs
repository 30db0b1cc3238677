//! Demo error type.

use std::convert::Infallible;

use fxpanel::ModelError;
use fxpanel_input::InputError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("editor layout rejected: {0}")]
    Model(#[from] ModelError),

    #[error("input source failed: {0}")]
    Input(#[from] InputError<Infallible>),
}
