//! Textures: surface color as a function of (u, v) and the hit point.

use std::path::Path;
use std::sync::Arc;

use crate::Color;
use lumen_core::RgbImage;
use lumen_math::{Interval, Point3};

/// Returned by image textures whose image could not be decoded.
const MISSING_IMAGE_COLOR: Color = Color::new(1.0, 0.0, 1.0);

/// Trait for textures evaluated at a surface point.
pub trait Texture: Send + Sync {
    /// Color at surface coordinates (u, v) and world point `p`.
    fn value(&self, u: f32, v: f32, p: Point3) -> Color;
}

/// A constant color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Point3) -> Color {
        self.albedo
    }
}

/// A 3D checkerboard.
///
/// Cells are unit cubes in space scaled by `scale`; the parity of the summed
/// cell indices selects the even or odd texture.
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    /// Checkerboard of two solid colors.
    pub fn from_colors(scale: f32, even: Color, odd: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Point3) -> Color {
        let cell = (self.inv_scale * p).floor();
        let sum = cell.x as i64 + cell.y as i64 + cell.z as i64;

        if sum.rem_euclid(2) == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

/// A texture sampled from a decoded image.
///
/// `v = 1` maps to the top row of the image. If the image failed to load
/// every lookup returns magenta.
pub struct ImageTexture {
    image: Option<RgbImage>,
}

impl ImageTexture {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image: Some(image) }
    }

    /// Decode `path`. A failed decode is logged and yields a texture that
    /// renders magenta.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match RgbImage::open(path) {
            Ok(image) => Self::from_image(image),
            Err(err) => {
                log::warn!("{}; substituting magenta", err);
                Self { image: None }
            }
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Point3) -> Color {
        let Some(image) = &self.image else {
            return MISSING_IMAGE_COLOR;
        };

        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        let v = 1.0 - unit.clamp(v);

        let i = (u * image.width() as f32) as i64;
        let j = (v * image.height() as f32) as i64;
        let [r, g, b] = image.pixel(i, j);

        let scale = 1.0 / 255.0;
        Color::new(r as f32 * scale, g as f32 * scale, b as f32 * scale)
    }
}
