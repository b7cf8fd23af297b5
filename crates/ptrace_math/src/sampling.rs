//! Mapping uniform (u, v) pairs to directions.
//!
//! Both samplers take their randomness from the caller so stratified
//! (u, v) grids can be fed in directly.

use std::f64::consts::PI;

use crate::{OrthonormalBasis, Vec3};

/// Cone spreads below this are treated as a perfect mirror.
const MIN_CONE_ANGLE: f64 = 1e-8;

/// Pick a direction inside the cone of half-angle `angle` around `axis`.
///
/// `axis` must be unit length; `u` and `v` are uniform in [0, 1).
pub fn sample_cone(axis: Vec3, angle: f64, u: f64, v: f64) -> Vec3 {
    if angle < MIN_CONE_ANGLE {
        return axis;
    }

    let polar = angle * (1.0 - 2.0 * u.acos() / PI);
    let radius = polar.sin();
    let height = polar.cos();
    let azimuth = v * 2.0 * PI;

    let basis = OrthonormalBasis::from_z_axis(axis);
    let local = Vec3::new(azimuth.cos() * radius, azimuth.sin() * radius, height);
    basis.transform(local).normalize()
}

/// Cosine-weighted direction on the hemisphere around `basis.z_axis`.
pub fn sample_hemisphere(basis: &OrthonormalBasis, u: f64, v: f64) -> Vec3 {
    let azimuth = 2.0 * PI * u;
    let radius = v.sqrt();
    let local = Vec3::new(
        azimuth.cos() * radius,
        azimuth.sin() * radius,
        (1.0 - v).sqrt(),
    );
    basis.transform(local).normalize()
}
