//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon.

use crate::renderer::render_pixel;
use crate::{Camera, Color, Hittable};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Edge buckets are clipped to the image, so every pixel belongs to
/// exactly one bucket.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let dist = |b: &Bucket| {
        let cx = b.x as f32 + b.width as f32 / 2.0;
        let cy = b.y as f32 + b.height as f32 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };

    // Stable sort keeps row-major order among equidistant buckets
    buckets.sort_by(|a, b| {
        dist(a)
            .partial_cmp(&dist(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket.
///
/// Pixels come back in row-major order within the bucket. Each pixel draws
/// from its own random stream, so the result does not depend on which
/// thread renders the bucket.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, world: &dyn Hittable) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(camera, world, bucket.x + local_x, bucket.y + local_y);
            pixels.push(color);
        }
    }

    log::debug!(
        "Bucket {} at ({}, {}) {}x{} done",
        bucket.index,
        bucket.x,
        bucket.y,
        bucket.width,
        bucket.height
    );

    BucketResult::new(*bucket, pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraConfig, DiffuseLight, HittableList, Sphere};
    use lumen_math::{Point3, Vec3};
    use std::sync::Arc;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 32);
        assert_eq!(buckets.len(), 4 * 3);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);

        for b in &buckets {
            assert!(b.x + b.width <= 100);
            assert!(b.y + b.height <= 70);
        }
    }

    #[test]
    fn test_buckets_cover_every_pixel_once() {
        let (w, h) = (37, 23);
        let mut seen = vec![0u32; (w * h) as usize];
        for b in generate_buckets(w, h, 8) {
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    seen[(y * w + x) as usize] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);

        for (i, b) in buckets.iter().enumerate() {
            assert_eq!(b.index, i);
        }
    }

    #[test]
    fn test_render_bucket_is_repeatable() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, -2.0),
            1.0,
            Arc::new(DiffuseLight::new(Vec3::ONE)),
        )));
        let config = CameraConfig::default()
            .with_image(1.0, 16)
            .with_quality(4, 3)
            .with_seed(7);
        let camera = Camera::new(&config).unwrap();

        let bucket = Bucket::new(4, 4, 8, 8, 0);
        let a = render_bucket(&bucket, &camera, &world);
        let b = render_bucket(&bucket, &camera, &world);

        assert_eq!(a.pixels.len(), 64);
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(a.bucket, bucket);
    }
}
