//! Camera for ray generation.

use crate::{Color, Ray, RenderError, RenderResult};
use lumen_math::sampling::{gen_f32, random_in_unit_disk};
use lumen_math::{Point3, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Largest accepted image, in pixels.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

/// User-facing camera and sampling settings.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    // Image settings
    /// Target width / height ratio
    pub aspect_ratio: f32,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,

    // Camera positioning
    pub vertical_fov_degrees: f32,
    pub look_from: Point3,
    pub look_at: Point3,
    pub view_up: Vec3,

    // Lens settings
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f32,
    /// Distance from camera to plane of perfect focus
    pub focus_dist: f32,

    /// Color of rays that escape the scene
    pub background: Color,

    /// Seed for the per-pixel random streams
    pub seed: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            vertical_fov_degrees: 90.0,
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            view_up: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            background: Color::ZERO,
            seed: 0,
        }
    }
}

impl CameraConfig {
    /// Set image shape.
    pub fn with_image(mut self, aspect_ratio: f32, image_width: u32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.image_width = image_width;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, view_up: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.view_up = view_up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(
        mut self,
        vertical_fov_degrees: f32,
        defocus_angle: f32,
        focus_dist: f32,
    ) -> Self {
        self.vertical_fov_degrees = vertical_fov_degrees;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Image height derived from width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    /// Check the settings before any rendering starts.
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if self.image_width == 0 {
            return invalid("image_width must be at least 1".into());
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return invalid(format!("aspect_ratio must be positive, got {}", self.aspect_ratio));
        }
        let pixels = self.image_width as u64 * self.image_height() as u64;
        if pixels > MAX_IMAGE_PIXELS {
            return invalid(format!(
                "{}x{} image exceeds {} pixels",
                self.image_width,
                self.image_height(),
                MAX_IMAGE_PIXELS
            ));
        }
        if self.samples_per_pixel == 0 {
            return invalid("samples_per_pixel must be at least 1".into());
        }
        if self.max_depth == 0 {
            return invalid("max_depth must be at least 1".into());
        }
        if !(self.vertical_fov_degrees > 0.0 && self.vertical_fov_degrees < 180.0) {
            return invalid(format!(
                "vertical_fov_degrees must be in (0, 180), got {}",
                self.vertical_fov_degrees
            ));
        }
        if !(self.focus_dist > 0.0) {
            return invalid(format!("focus_dist must be positive, got {}", self.focus_dist));
        }
        if !(self.defocus_angle >= 0.0) {
            return invalid(format!(
                "defocus_angle must not be negative, got {}",
                self.defocus_angle
            ));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            return invalid("look_from and look_at must differ".into());
        }
        if self.view_up.cross(view).length_squared() < 1e-12 {
            return invalid("view_up must not be parallel to the view direction".into());
        }

        Ok(())
    }
}

/// Camera for generating rays into the scene.
///
/// Built from a validated `CameraConfig`; all derived vectors are computed
/// once at construction.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    image_height: u32,

    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,

    // Stratification
    sqrt_spp: u32,
    recip_sqrt_spp: f32,
    pixel_samples_scale: f32,
}

impl Camera {
    /// Validate `config` and compute the camera frame.
    pub fn new(config: &CameraConfig) -> RenderResult<Self> {
        config.validate()?;

        let image_width = config.image_width;
        let image_height = config.image_height();

        let sqrt_spp = ((config.samples_per_pixel as f32).sqrt() as u32).max(1);
        let recip_sqrt_spp = 1.0 / sqrt_spp as f32;
        let pixel_samples_scale = 1.0 / (sqrt_spp * sqrt_spp) as f32;

        let center = config.look_from;

        // Calculate viewport dimensions
        let theta = config.vertical_fov_degrees.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // Calculate camera basis vectors
        let w = (config.look_from - config.look_at).normalize();
        let u = config.view_up.cross(w).normalize();
        let v = w.cross(u);

        // Viewport edges; v runs down the image
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left =
            center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();

        Ok(Self {
            config: config.clone(),
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            sqrt_spp,
            recip_sqrt_spp,
            pixel_samples_scale,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn image_width(&self) -> u32 {
        self.config.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    pub fn background(&self) -> Color {
        self.config.background
    }

    /// Side of the per-pixel stratification grid.
    pub fn sqrt_spp(&self) -> u32 {
        self.sqrt_spp
    }

    /// Reciprocal of the number of samples actually taken per pixel.
    pub fn pixel_samples_scale(&self) -> f32 {
        self.pixel_samples_scale
    }

    /// Generate a ray through pixel (i, j), jittered within stratum
    /// (s_i, s_j) of the pixel's sub-grid.
    ///
    /// The ray originates on the defocus disk when defocus is enabled.
    pub fn get_ray(&self, i: u32, j: u32, s_i: u32, s_j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = self.sample_square_stratified(s_i, s_j, rng);

        let pixel_sample = self.pixel00_loc
            + (i as f32 + offset.x) * self.pixel_delta_u
            + (j as f32 + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.config.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Random offset inside sub-square (s_i, s_j) of [-0.5, 0.5]^2.
    fn sample_square_stratified(&self, s_i: u32, s_j: u32, rng: &mut dyn RngCore) -> Vec3 {
        let px = (s_i as f32 + gen_f32(rng)) * self.recip_sqrt_spp - 0.5;
        let py = (s_j as f32 + gen_f32(rng)) * self.recip_sqrt_spp - 0.5;
        Vec3::new(px, py, 0.0)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_config() -> CameraConfig {
        CameraConfig::default()
            .with_image(1.0, 100)
            .with_quality(9, 10)
            .with_position(Point3::ZERO, Point3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0)
    }

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(&square_config()).unwrap();

        assert_eq!(camera.center, Point3::ZERO);
        assert!((camera.pixel_delta_u.normalize() - Vec3::X).length() < 1e-6);
        assert!((camera.pixel_delta_v.normalize() - Vec3::NEG_Y).length() < 1e-6);

        // Looking down +X puts screen-right along +Z
        let config = square_config().with_position(Point3::ZERO, Point3::X, Vec3::Y);
        let camera = Camera::new(&config).unwrap();
        assert!((camera.pixel_delta_u.normalize() - Vec3::Z).length() < 1e-6);
        assert!((camera.pixel_delta_v.normalize() - Vec3::NEG_Y).length() < 1e-6);

        let mut rng = StdRng::seed_from_u64(42);
        let dir = camera.get_ray(50, 50, 1, 1, &mut rng).direction().normalize();
        assert!(dir.x > 0.99);
    }

    #[test]
    fn test_image_height() {
        let config = CameraConfig::default().with_image(16.0 / 9.0, 400);
        assert_eq!(config.image_height(), 225);

        // Never below one row
        let config = CameraConfig::default().with_image(1000.0, 10);
        assert_eq!(config.image_height(), 1);
    }

    #[test]
    fn test_pixel00_location() {
        let camera = Camera::new(&square_config()).unwrap();

        // Viewport is 2x2 at distance 1; the first pixel center sits half a
        // pixel in from the upper-left corner
        let expected = Point3::new(-1.0 + 0.01, 1.0 - 0.01, -1.0);
        assert!((camera.pixel00_loc - expected).length() < 1e-5);
        assert!((camera.pixel_delta_u - Vec3::new(0.02, 0.0, 0.0)).length() < 1e-6);
        assert!((camera.pixel_delta_v - Vec3::new(0.0, -0.02, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_camera_ray_direction() {
        let camera = Camera::new(&square_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        // Center ray should point roughly towards -Z
        let ray = camera.get_ray(50, 50, 1, 1, &mut rng);
        let dir = ray.direction().normalize();
        assert!(dir.z < -0.99);
        assert_eq!(ray.origin(), Point3::ZERO);

        // Upper-left pixel looks up and to the left
        let ray = camera.get_ray(0, 0, 0, 0, &mut rng);
        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);
    }

    #[test]
    fn test_stratified_samples_stay_in_their_cell() {
        let camera = Camera::new(&square_config()).unwrap();
        assert_eq!(camera.sqrt_spp(), 3);
        assert!((camera.pixel_samples_scale() - 1.0 / 9.0).abs() < 1e-7);

        let mut rng = StdRng::seed_from_u64(42);
        for s_j in 0..3 {
            for s_i in 0..3 {
                for _ in 0..20 {
                    let offset = camera.sample_square_stratified(s_i, s_j, &mut rng);
                    let lo_x = -0.5 + s_i as f32 / 3.0;
                    let lo_y = -0.5 + s_j as f32 / 3.0;
                    assert!(offset.x >= lo_x - 1e-6 && offset.x <= lo_x + 1.0 / 3.0 + 1e-6);
                    assert!(offset.y >= lo_y - 1e-6 && offset.y <= lo_y + 1.0 / 3.0 + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_non_square_sample_count_rounds_down() {
        let camera = Camera::new(&square_config().with_quality(10, 5)).unwrap();
        assert_eq!(camera.sqrt_spp(), 3);

        let camera = Camera::new(&square_config().with_quality(1, 5)).unwrap();
        assert_eq!(camera.sqrt_spp(), 1);
        assert_eq!(camera.pixel_samples_scale(), 1.0);
    }

    #[test]
    fn test_defocus_disk_origins() {
        let config = square_config().with_lens(90.0, 10.0, 4.0);
        let camera = Camera::new(&config).unwrap();
        let radius = 4.0 * (5.0_f32).to_radians().tan();

        let mut rng = StdRng::seed_from_u64(42);
        let mut moved = false;
        for _ in 0..50 {
            let origin = camera.get_ray(50, 50, 0, 0, &mut rng).origin();
            // Disk lies in the camera's u-v plane
            assert!(origin.z.abs() < 1e-6);
            assert!(origin.length() <= radius + 1e-5);
            moved |= origin.length() > 1e-4;
        }
        assert!(moved);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            square_config().with_image(1.0, 0),
            square_config().with_image(1e-6, 400),
            square_config().with_image(1.0, 1 << 15),
            square_config().with_image(0.0, 100),
            square_config().with_quality(0, 10),
            square_config().with_quality(4, 0),
            square_config().with_lens(0.0, 0.0, 1.0),
            square_config().with_lens(180.0, 0.0, 1.0),
            square_config().with_lens(90.0, 0.0, 0.0),
            square_config().with_lens(90.0, -1.0, 1.0),
            square_config().with_position(Point3::ONE, Point3::ONE, Vec3::Y),
            square_config().with_position(Point3::ZERO, Point3::new(0.0, 5.0, 0.0), Vec3::Y),
        ];

        for config in bad {
            assert!(
                matches!(Camera::new(&config), Err(RenderError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_config_from_partial_json() {
        let json = r#"{
            "image_width": 64,
            "look_from": [0.0, 0.0, 3.0],
            "background": [0.1, 0.2, 0.3]
        }"#;
        let config: CameraConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.image_width, 64);
        assert_eq!(config.look_from, Point3::new(0.0, 0.0, 3.0));
        assert_eq!(config.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(config.samples_per_pixel, CameraConfig::default().samples_per_pixel);
    }
}
