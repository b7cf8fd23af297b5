//! Sphere primitive for ray tracing.

use ptrace_math::{Ray, Vec3};

use crate::hittable::{HitRecord, Hittable, INTERSECT_EPSILON};
use crate::{RenderError, RenderResult};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. Negative radii are rejected.
    pub fn new(center: Vec3, radius: f64) -> RenderResult<Self> {
        if radius < 0.0 || radius.is_nan() {
            return Err(RenderError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Check whether a point lies within the sphere (surface included).
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length() <= self.radius
    }
}

impl Hittable for Sphere {
    /// Solves t^2 - 2bt + c = 0 for a unit direction, with b = (center - origin).d
    /// and c = |center - origin|^2 - r^2.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let oc = self.center - ray.origin;
        let b = oc.dot(ray.direction);
        let discriminant = b * b - oc.length_squared() + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t_near = b - sqrtd;
        let t_far = b + sqrtd;
        if t_near < INTERSECT_EPSILON && t_far < INTERSECT_EPSILON {
            return None;
        }

        // Prefer the near root; fall back to the far one when starting inside
        let distance = if t_near > INTERSECT_EPSILON { t_near } else { t_far };
        let position = ray.at(distance);
        let mut normal = (position - self.center).normalize();
        let is_inside = normal.dot(ray.direction) > 0.0;
        if is_inside {
            normal = -normal;
        }

        Some(HitRecord::new(distance, position, is_inside, normal))
    }
}
