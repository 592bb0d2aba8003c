//! Errors surfaced before or after a render, never during the pixel loop.

use thiserror::Error;

/// Errors that can occur while setting up or finishing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] lumen_core::CoreError),
}

pub type RenderResult<T> = Result<T, RenderError>;
