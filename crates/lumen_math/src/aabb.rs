use crate::{Interval, Ray, Vec3};

/// Minimum thickness of any AABB axis.
const PAD_DELTA: f32 = 0.0001;

/// Axis-Aligned Bounding Box.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }.pad()
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));
        Self::new(x, y, z)
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method. A zero direction component yields infinite slab
    /// parameters, which leave that axis unconstrained when the origin
    /// lies between its planes and reject the ray otherwise.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv_d = 1.0 / r.direction[axis];

            let mut t0 = (slab.min - r.origin[axis]) * inv_d;
            let mut t1 = (slab.max - r.origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > ray_t.min {
                ray_t.min = t0;
            }
            if t1 < ray_t.max {
                ray_t.max = t1;
            }
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Widen any axis thinner than the padding delta.
    ///
    /// Flat primitives such as quads would otherwise produce boxes the slab
    /// test can never enter.
    pub fn pad(&self) -> Aabb {
        let pad_axis = |i: Interval| {
            if i.size() < PAD_DELTA {
                i.expand(PAD_DELTA)
            } else {
                i
            }
        };

        Aabb {
            x: pad_axis(self.x),
            y: pad_axis(self.y),
            z: pad_axis(self.z),
        }
    }

    /// Translate (move) the AABB by an offset vector.
    pub fn translate(&self, offset: Vec3) -> Aabb {
        Aabb::new(
            self.x.add_scalar(offset.x),
            self.y.add_scalar(offset.y),
            self.z.add_scalar(offset.z),
        )
    }

    /// The eight corner points of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 == 0 { self.x.min } else { self.x.max },
                if i & 2 == 0 { self.y.min } else { self.y.max },
                if i & 4 == 0 { self.z.min } else { self.z.max },
            );
        }
        corners
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            0
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        Vec3::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.x, Interval::new(0.0, 10.0));
        assert_eq!(aabb.y, Interval::new(0.0, 10.0));
        assert_eq!(aabb.z, Interval::new(0.0, 10.0));
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::from_points(Vec3::new(3.0, 3.0, 3.0), Vec3::new(10.0, 10.0, 10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.x.min, 0.0);
        assert_eq!(surrounding.x.max, 10.0);
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &box1), box1);
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = unit_box();

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_hit_respects_query_interval() {
        let aabb = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        // Box spans t in [4, 6]
        assert!(aabb.hit(&ray, Interval::new(0.0, 4.5)));
        assert!(aabb.hit(&ray, Interval::new(5.5, 10.0)));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.9)));
        assert!(!aabb.hit(&ray, Interval::new(6.1, 10.0)));
    }

    #[test]
    fn test_aabb_hit_zero_direction_component() {
        let aabb = unit_box();

        // Parallel to the x slabs and between them
        let inside = Ray::new(Vec3::new(0.5, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&inside, Interval::UNIVERSE));

        // Parallel to the x slabs but outside them
        let outside = Ray::new(Vec3::new(1.5, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&outside, Interval::UNIVERSE));
    }

    #[test]
    fn test_aabb_hit_mirror_symmetry() {
        let aabb = Aabb::from_points(Vec3::new(1.0, -2.0, 0.5), Vec3::new(3.0, 1.0, 2.5));
        let center = aabb.centroid();

        let rays = [
            Ray::new(Vec3::new(-4.0, 0.3, 1.2), Vec3::new(1.0, 0.05, 0.1)),
            Ray::new(Vec3::new(-4.0, 3.0, 1.2), Vec3::new(1.0, 0.4, -0.2)),
            Ray::new(Vec3::new(2.0, -6.0, 1.5), Vec3::new(0.02, 1.0, 0.0)),
            Ray::new(Vec3::new(8.0, 8.0, 8.0), Vec3::new(-1.0, -1.3, -1.0)),
            Ray::new(Vec3::new(2.0, 0.0, 1.0), Vec3::new(0.3, -0.7, 0.2)),
        ];

        for ray in rays {
            for axis in 0..3 {
                let mut origin = ray.origin;
                let mut direction = ray.direction;
                origin[axis] = 2.0 * center[axis] - origin[axis];
                direction[axis] = -direction[axis];
                let mirrored = Ray::new(origin, direction);

                let t = Interval::new(0.0, 100.0);
                assert_eq!(
                    aabb.hit(&ray, t),
                    aabb.hit(&mirrored, t),
                    "mirror about axis {} disagrees for {:?}",
                    axis,
                    ray
                );
            }
        }
    }

    #[test]
    fn test_aabb_pad_flat_box() {
        let flat = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(flat.z.size() > 0.0);
        assert!(flat.z.contains(0.0));

        // A ray straight into the flat face still enters it
        let ray = Ray::new(Vec3::new(0.5, 0.5, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(flat.hit(&ray, Interval::new(0.0, 10.0)));
    }

    #[test]
    fn test_aabb_centroid() {
        let aabb = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(aabb.centroid(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);
    }

    #[test]
    fn test_aabb_translate() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let translated = aabb.translate(Vec3::new(5.0, 0.0, 0.0));

        assert_eq!(translated.x.min, 5.0);
        assert_eq!(translated.x.max, 6.0);
        assert_eq!(translated.y.min, 0.0);
        assert_eq!(translated.z.min, 0.0);
    }

    #[test]
    fn test_aabb_corners() {
        let corners = unit_box().corners();
        assert!(corners.contains(&Vec3::new(-1.0, -1.0, -1.0)));
        assert!(corners.contains(&Vec3::new(1.0, 1.0, 1.0)));
        assert!(corners.contains(&Vec3::new(1.0, -1.0, 1.0)));
    }
}
