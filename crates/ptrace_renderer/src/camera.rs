//! Camera for ray generation.

use std::f64::consts::PI;

use ptrace_math::{AxisPair, OrthonormalBasis, Ray, Vec3};
use rand::{Rng, RngCore};

/// Pinhole camera with optional thin-lens depth of field.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    basis: OrthonormalBasis,
    image_width: u32,
    image_height: u32,
    aspect_ratio: f64,
    /// Distance from the eye to the image plane spanning [-1, 1] vertically
    plane_distance: f64,
    aperture_radius: f64,
    focal_distance: f64,
}

impl Camera {
    /// Create a camera at `eye` looking at `look_at`.
    ///
    /// `up` should be unit length; it only needs to be roughly perpendicular
    /// to the view direction. `vertical_fov` is in degrees.
    pub fn new(
        eye: Vec3,
        look_at: Vec3,
        up: Vec3,
        image_width: u32,
        image_height: u32,
        vertical_fov: f64,
    ) -> Self {
        let forward = (look_at - eye).normalize();
        Self {
            position: eye,
            basis: OrthonormalBasis::from_two(AxisPair::ZY, forward, up),
            image_width,
            image_height,
            aspect_ratio: image_width as f64 / image_height as f64,
            plane_distance: 1.0 / (vertical_fov.to_radians() / 2.0).tan(),
            aperture_radius: 0.0,
            focal_distance: 0.0,
        }
    }

    /// Enable depth of field, focusing on the distance of `focal_point`.
    ///
    /// A radius of 0 turns depth of field off again.
    pub fn set_focus(&mut self, focal_point: Vec3, aperture_radius: f64) {
        self.focal_distance = (focal_point - self.position).length();
        self.aperture_radius = aperture_radius;
    }

    /// Builder-style variant of [`Camera::set_focus`].
    pub fn with_focus(mut self, focal_point: Vec3, aperture_radius: f64) -> Self {
        self.set_focus(focal_point, aperture_radius);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn basis(&self) -> &OrthonormalBasis {
        &self.basis
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn aperture_radius(&self) -> f64 {
        self.aperture_radius
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    /// Generate a ray through a random point of pixel (px, py).
    ///
    /// Draws the x then y jitter, followed by the lens angle and radius when
    /// depth of field is on.
    pub fn get_ray(&self, px: u32, py: u32, rng: &mut dyn RngCore) -> Ray {
        let x = (px as f64 + rng.gen::<f64>()) / self.image_width as f64;
        let y = (py as f64 + rng.gen::<f64>()) / self.image_height as f64;
        self.ray_from_unit(2.0 * x - 1.0, 2.0 * y - 1.0, rng)
    }

    /// Ray through normalised device coordinates in [-1, 1].
    fn ray_from_unit(&self, x: f64, y: f64, rng: &mut dyn RngCore) -> Ray {
        let direction = (self.basis.x_axis * (-x * self.aspect_ratio)
            + self.basis.y_axis * -y
            + self.basis.z_axis * self.plane_distance)
            .normalize();

        if self.aperture_radius == 0.0 {
            return Ray::new(self.position, direction);
        }

        let focal_point = self.position + direction * self.focal_distance;
        let angle = rng.gen::<f64>() * 2.0 * PI;
        let radius = rng.gen::<f64>() * self.aperture_radius;
        let origin = self.position
            + self.basis.x_axis * (angle.cos() * radius)
            + self.basis.y_axis * (angle.sin() * radius);

        Ray::from_points(origin, focal_point)
    }
}
