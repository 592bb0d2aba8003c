//! Lumen Core - image I/O for the Lumen renderer.
//!
//! This crate provides:
//!
//! - **Decoding**: `RgbImage`, an 8-bit RGB pixel buffer with clamped fetches,
//!   used by image textures
//! - **Encoding**: `save_rgb8`, which writes a finished framebuffer to disk
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{save_rgb8, RgbImage};
//!
//! let earth = RgbImage::open("earthmap.jpg")?;
//! println!("{}x{}", earth.width(), earth.height());
//!
//! save_rgb8("render.png", width, height, &buffer)?;
//! ```

pub mod error;
pub mod image_io;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use image_io::{save_rgb8, RgbImage};
