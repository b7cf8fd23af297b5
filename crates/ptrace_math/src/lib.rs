//! ptrace math - vector algebra, orthonormal frames and rays.
//!
//! All geometry runs in double precision: `Vec3` is glam's `DVec3`, which
//! already provides the component-wise operators (value and in-place forms),
//! `dot`, `cross`, `length`, `length_squared` and `normalize`. This crate adds
//! the path-tracing specific pieces on top of it.

// Re-export glam for convenience
pub use glam;

pub type Vec3 = glam::DVec3;

mod basis;
mod ray;
mod sampling;
mod vector;

pub use basis::{AxisPair, MathError, OrthonormalBasis};
pub use ray::Ray;
pub use sampling::{sample_cone, sample_hemisphere};
pub use vector::{is_close, reflect, reflectance, versor, DEFAULT_EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / Vec3::splat(2.0), Vec3::new(2.0, 2.5, 3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec3::new(2.0, 2.5, 3.0));
    }
}
