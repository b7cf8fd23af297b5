//! Reflection, Fresnel reflectance and tolerant comparisons for `Vec3`.

use crate::Vec3;

/// Distance under which two vectors are treated as equal by [`is_close`].
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Unit vector along the axis with the given index (0 = x, 1 = y, 2 = z).
///
/// Panics if `index` is not below 3.
pub fn versor(index: usize) -> Vec3 {
    assert!(index < 3, "axis index {} out of range", index);
    let mut v = Vec3::ZERO;
    v[index] = 1.0;
    v
}

/// Check whether two vectors lie within `epsilon` of each other.
#[inline]
pub fn is_close(a: Vec3, b: Vec3, epsilon: f64) -> bool {
    (a - b).length_squared() < epsilon * epsilon
}

/// Mirror `incoming` about the surface `normal`.
///
/// Both vectors must be unit length; the result then is too.
#[inline]
pub fn reflect(normal: Vec3, incoming: Vec3) -> Vec3 {
    incoming - normal * 2.0 * normal.dot(incoming)
}

/// Fraction of light reflected when `incoming` crosses a surface with the
/// given `normal` from a medium with index `ior_from` into `ior_to`.
///
/// Evaluates the unpolarised Fresnel equations (no Schlick approximation).
/// Past the critical angle the result is 1.0 (total internal reflection).
pub fn reflectance(normal: Vec3, incoming: Vec3, ior_from: f64, ior_to: f64) -> f64 {
    let ior_ratio = ior_from / ior_to;
    let cos_theta_i = -normal.dot(incoming);
    let sin_theta_t_sqr = ior_ratio * ior_ratio * (1.0 - cos_theta_i * cos_theta_i);

    if sin_theta_t_sqr > 1.0 {
        return 1.0;
    }

    let cos_theta_t = (1.0 - sin_theta_t_sqr).sqrt();
    let r_perpendicular = (ior_from * cos_theta_i - ior_to * cos_theta_t)
        / (ior_from * cos_theta_i + ior_to * cos_theta_t);
    let r_parallel = (ior_to * cos_theta_i - ior_from * cos_theta_t)
        / (ior_to * cos_theta_i + ior_from * cos_theta_t);

    (r_perpendicular * r_perpendicular + r_parallel * r_parallel) / 2.0
}
