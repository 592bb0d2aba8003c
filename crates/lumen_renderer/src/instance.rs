//! Instancing decorators: translate and rotate another hittable.
//!
//! Rather than moving geometry, each decorator moves the incoming ray into
//! the child's object space, delegates the hit test, and moves the
//! resulting hit point (and normal) back into world space. Bounding boxes
//! are computed once at construction.

use crate::{
    hittable::{HitRecord, Hittable},
    Ray,
};
use lumen_math::{Aabb, Interval, Point3, Vec3};

/// A hittable displaced by a fixed offset.
pub struct Translate {
    object: Box<dyn Hittable>,
    offset: Vec3,
    bbox: Aabb,
}

impl Translate {
    pub fn new(object: impl Hittable + 'static, offset: Vec3) -> Self {
        let bbox = object.bounding_box().translate(offset);

        Self {
            object: Box::new(object),
            offset,
            bbox,
        }
    }
}

impl Hittable for Translate {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        // Move the ray backwards by the offset
        let offset_ray = Ray::new(ray.origin() - self.offset, ray.direction());

        let mut rec = self.object.hit(&offset_ray, ray_t)?;
        rec.p += self.offset;
        Some(rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// A hittable rotated about the world Y axis.
pub struct RotateY {
    object: Box<dyn Hittable>,
    sin_theta: f32,
    cos_theta: f32,
    bbox: Aabb,
}

impl RotateY {
    /// Rotate `object` counter-clockwise (seen from +Y) by `angle` degrees.
    pub fn new(object: impl Hittable + 'static, angle: f32) -> Self {
        let (sin_theta, cos_theta) = angle.to_radians().sin_cos();

        let mut rotate_y = Self {
            object: Box::new(object),
            sin_theta,
            cos_theta,
            bbox: Aabb::EMPTY,
        };
        rotate_y.bbox = rotate_y.world_bbox();
        rotate_y
    }

    /// Bounds of the child's 8 box corners after rotation into world space.
    fn world_bbox(&self) -> Aabb {
        let local = self.object.bounding_box();
        if local.x.min > local.x.max {
            return Aabb::EMPTY;
        }

        let corners = local.corners().map(|c| self.to_world(c));
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), &c| (min.min(c), max.max(c)));

        Aabb::from_points(min, max)
    }

    /// World space to object space (inverse rotation).
    #[inline]
    fn to_object(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    /// Object space to world space (forward rotation).
    #[inline]
    fn to_world(&self, v: Point3) -> Point3 {
        Point3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Hittable for RotateY {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let rotated = Ray::new(self.to_object(ray.origin()), self.to_object(ray.direction()));

        // Rotation preserves the front/back face decision made by the child
        let mut rec = self.object.hit(&rotated, ray_t)?;
        rec.p = self.to_world(rec.p);
        rec.normal = self.to_world(rec.normal);
        Some(rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
