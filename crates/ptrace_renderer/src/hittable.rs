//! Hittable trait and HitRecord for ray-object intersection.

use ptrace_math::{Ray, Vec3};

/// Hits closer than this along the ray are discarded, which keeps bounced
/// rays from re-hitting the surface they start on.
pub const INTERSECT_EPSILON: f64 = 1e-7;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray
    pub distance: f64,
    /// Point of intersection
    pub position: Vec3,
    /// Whether the ray arrived from inside (or the back of) the surface
    pub is_inside: bool,
    /// Unit surface normal, always facing the incoming ray
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(distance: f64, position: Vec3, is_inside: bool, normal: Vec3) -> Self {
        Self {
            distance,
            position,
            is_inside,
            normal,
        }
    }
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection further than [`INTERSECT_EPSILON`]
    /// along the ray, if any.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord>;
}
