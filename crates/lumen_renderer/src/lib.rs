//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer: stratified primary rays with optional defocus
//! blur, analytic sphere and quad intersection, translate/rotate instancing,
//! and textured Lambertian, metal, dielectric and emissive materials.
//!
//! ```ignore
//! let mut world = HittableList::new();
//! world.add(Arc::new(Sphere::new(Vec3::ZERO, 1.0, Arc::new(Lambertian::new(Color::ONE)))));
//!
//! let camera = Camera::new(&CameraConfig::default())?;
//! render(&camera, &world).save("render.png")?;
//! ```

mod bucket;
mod bvh;
mod camera;
mod error;
mod hittable;
mod instance;
mod material;
mod quad;
mod renderer;
mod sphere;
mod texture;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::BvhNode;
pub use camera::{Camera, CameraConfig, MAX_IMAGE_PIXELS};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use instance::{RotateY, Translate};
pub use material::{Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult};
pub use quad::{make_box, Quad};
pub use renderer::{color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer};
pub use sphere::Sphere;
pub use texture::{CheckerTexture, ImageTexture, SolidColor, Texture};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Aabb, Interval, Point3, Ray, Vec3};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;
