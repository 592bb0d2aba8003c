// Vector utilities for Vec3
//
// Extends glam::Vec3 with the reflection/refraction helpers the shading
// code needs.

use glam::Vec3;

/// Extension trait for Vec3 to provide ray tracing utilities
pub trait Vec3Ext {
    /// True if every component is close to zero.
    fn near_zero(&self) -> bool;

    /// Mirror this vector about the normal `n`.
    fn reflect(&self, n: Vec3) -> Vec3;

    /// Refract this unit vector through a surface with normal `n`.
    ///
    /// `etai_over_etat` is the ratio of refractive indices on the incident
    /// and transmitted sides.
    fn refract(&self, n: Vec3, etai_over_etat: f32) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        const S: f32 = 1e-8;
        self.x.abs() < S && self.y.abs() < S && self.z.abs() < S
    }

    #[inline]
    fn reflect(&self, n: Vec3) -> Vec3 {
        *self - 2.0 * self.dot(n) * n
    }

    #[inline]
    fn refract(&self, n: Vec3, etai_over_etat: f32) -> Vec3 {
        let cos_theta = (-*self).dot(n).min(1.0);
        let r_out_perp = etai_over_etat * (*self + cos_theta * n);
        let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
        r_out_perp + r_out_parallel
    }
}
