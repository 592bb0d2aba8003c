//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Stratified anti-aliasing
//! - Gamma correction
//! - Parallel bucket rendering

use std::path::Path;
use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Hittable, Ray, RenderResult};
use lumen_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Minimum hit distance, keeps bounced rays from re-hitting their origin.
const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// Traces the ray through the scene, bouncing off surfaces and accumulating
/// emitted light. Rays that escape return `background`.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: Color,
    rng: &mut dyn RngCore,
) -> Color {
    // Bounce limit reached, no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) else {
        return background;
    };

    let emission = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let scattered_color = ray_color(&result.scattered, world, depth - 1, background, rng);
            emission + result.attenuation * scattered_color
        }
        // Absorbed
        None => emission,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-encoded 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let quantize = |c: f32| (256.0 * intensity.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Random stream for one pixel.
///
/// Derived only from the render seed and the pixel index, so a pixel's value
/// is the same however the image is split across threads.
fn pixel_rng(seed: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Render a single pixel with stratified multi-sampling.
pub fn render_pixel(camera: &Camera, world: &dyn Hittable, x: u32, y: u32) -> Color {
    let config = camera.config();
    let index = y as u64 * camera.image_width() as u64 + x as u64;
    let mut rng = pixel_rng(config.seed, index);

    let sqrt_spp = camera.sqrt_spp();
    let mut pixel_color = Color::ZERO;

    for s_j in 0..sqrt_spp {
        for s_i in 0..sqrt_spp {
            let ray = camera.get_ray(x, y, s_i, s_j, &mut rng);
            pixel_color += ray_color(&ray, world, config.max_depth, config.background, &mut rng);
        }
    }

    pixel_color * camera.pixel_samples_scale()
}

/// Linear-color framebuffer, row-major from the top-left pixel.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Gamma-encoded 8-bit RGB bytes, 3 per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }

    /// Encode to an image file; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        lumen_core::save_rgb8(path, self.width, self.height, &self.to_rgb8())?;
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel and then copied into the framebuffer.
pub fn render(camera: &Camera, world: &dyn Hittable) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    log::info!(
        "Rendering {}x{} at {} spp, max depth {} ({} buckets)",
        width,
        height,
        camera.sqrt_spp() * camera.sqrt_spp(),
        camera.max_depth(),
        buckets.len()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, world))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
