use crate::Vec3;

/// An oriented ray in 3D space.
///
/// The direction is expected to be unit length; distances reported by
/// intersection code are measured along it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from an origin and a unit direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `origin` and heading towards `target`.
    pub fn from_points(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Get the point along the ray at the given distance.
    ///
    /// Returns: origin + distance * direction
    #[inline]
    pub fn at(&self, distance: f64) -> Vec3 {
        self.origin + self.direction * distance
    }
}
