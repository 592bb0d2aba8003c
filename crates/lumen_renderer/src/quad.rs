//! Planar parallelogram primitive and the box helper built from it.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    Material, Ray,
};
use lumen_math::{Aabb, Interval, Point3, Vec3};

/// Rays whose direction is this close to parallel with the plane miss.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A parallelogram spanned by edges `u` and `v` from corner `q`.
pub struct Quad {
    q: Point3,
    u: Vec3,
    v: Vec3,
    /// n / (n . n), used to recover planar coordinates
    w: Vec3,
    normal: Vec3,
    /// Plane offset: normal . q
    d: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Quad {
    pub fn new(q: Point3, u: Vec3, v: Vec3, material: Arc<dyn Material>) -> Self {
        let n = u.cross(v);
        let normal = n.normalize();
        let d = normal.dot(q);
        let w = n / n.dot(n);

        // Both diagonals, so a skewed quad is fully enclosed
        let bbox_diagonal1 = Aabb::from_points(q, q + u + v);
        let bbox_diagonal2 = Aabb::from_points(q + u, q + v);
        let bbox = Aabb::surrounding(&bbox_diagonal1, &bbox_diagonal2).pad();

        Self {
            q,
            u,
            v,
            w,
            normal,
            d,
            material,
            bbox,
        }
    }

    /// Planar coordinates (alpha, beta) of a point already on the plane.
    fn planar_coordinates(&self, p: Point3) -> (f32, f32) {
        let planar_hitpt = p - self.q;
        let alpha = self.w.dot(planar_hitpt.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar_hitpt));
        (alpha, beta)
    }

    fn is_interior(alpha: f32, beta: f32) -> bool {
        let unit = Interval::new(0.0, 1.0);
        unit.contains(alpha) && unit.contains(beta)
    }
}

impl Hittable for Quad {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let denom = self.normal.dot(ray.direction());

        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.d - self.normal.dot(ray.origin())) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let p = ray.at(t);
        let (alpha, beta) = self.planar_coordinates(p);
        if !Self::is_interior(alpha, beta) {
            return None;
        }

        Some(HitRecord::new(
            ray,
            t,
            p,
            self.normal,
            (alpha, beta),
            self.material.as_ref(),
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// A closed axis-aligned box of six quads spanning corners `a` and `b`.
pub fn make_box(a: Point3, b: Point3, material: Arc<dyn Material>) -> HittableList {
    let mut sides = HittableList::new();

    let min = a.min(b);
    let max = a.max(b);

    let dx = Vec3::new(max.x - min.x, 0.0, 0.0);
    let dy = Vec3::new(0.0, max.y - min.y, 0.0);
    let dz = Vec3::new(0.0, 0.0, max.z - min.z);

    let faces = [
        (Point3::new(min.x, min.y, max.z), dx, dy),  // front
        (Point3::new(max.x, min.y, max.z), -dz, dy), // right
        (Point3::new(max.x, min.y, min.z), -dx, dy), // back
        (Point3::new(min.x, min.y, min.z), dz, dy),  // left
        (Point3::new(min.x, max.y, max.z), dx, -dz), // top
        (Point3::new(min.x, min.y, min.z), dx, dz),  // bottom
    ];

    for (q, u, v) in faces {
        sides.add(Arc::new(Quad::new(q, u, v, material.clone())));
    }

    sides
}
