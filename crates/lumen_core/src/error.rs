//! Errors raised by image decoding and encoding.

use thiserror::Error;

/// Errors that can occur while reading or writing images.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to load image {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Buffer holds {actual} bytes, expected {expected} for a {width}x{height} RGB image")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

pub type CoreResult<T> = Result<T, CoreError>;
