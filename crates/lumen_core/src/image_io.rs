//! Image decoding and encoding.
//!
//! Textures read their pixels through `RgbImage`, which always answers a
//! fetch: coordinates are clamped into the image. The renderer's output
//! buffer is handed to `save_rgb8` for encoding.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Bytes per decoded pixel (R, G, B).
const BYTES_PER_PIXEL: usize = 3;

/// A decoded 8-bit RGB image.
///
/// Pixels are stored row-major, top row first.
#[derive(Clone, Debug)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Decode an image file, converting it to 8-bit RGB.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| CoreError::Load {
            path: path.display().to_string(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        log::debug!(
            "Loaded image: {} ({}x{}, {:.1} KB)",
            path.display(),
            width,
            height,
            (width as usize * height as usize * BYTES_PER_PIXEL) as f32 / 1024.0
        );

        Self::from_raw(width, height, rgb.into_raw())
    }

    /// Wrap an existing row-major RGB buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyImage { width, height });
        }
        check_buffer_len(width, height, data.len())?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fetch the pixel at (x, y), clamping the coordinates into
    /// `[0, width) x [0, height)`.
    pub fn pixel(&self, x: i64, y: i64) -> [u8; 3] {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;

        let idx = (y * self.width as usize + x) * BYTES_PER_PIXEL;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Encode a row-major RGB buffer to `path`.
///
/// The file format is chosen from the extension.
pub fn save_rgb8(path: impl AsRef<Path>, width: u32, height: u32, data: &[u8]) -> CoreResult<()> {
    let path = path.as_ref();
    if width == 0 || height == 0 {
        return Err(CoreError::EmptyImage { width, height });
    }
    check_buffer_len(width, height, data.len())?;

    image::save_buffer(path, data, width, height, image::ColorType::Rgb8).map_err(|source| {
        CoreError::Save {
            path: path.display().to_string(),
            source,
        }
    })?;

    log::debug!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn check_buffer_len(width: u32, height: u32, actual: usize) -> CoreResult<()> {
    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    if actual != expected {
        return Err(CoreError::BufferSize {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}
