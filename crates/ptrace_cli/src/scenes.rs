//! Built-in demo scenes.
//!
//! All scenes share the same camera and lighting: a large light sphere above
//! and to the right of the camera, and a dim blue sky sphere enclosing
//! everything.

use std::fmt;

use clap::ValueEnum;
use ptrace_core::{Color, MaterialData, RenderConfig};
use ptrace_math::Vec3;
use ptrace_renderer::{Camera, RenderResult, Scene, SceneBuilder};

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, -3.2);
const VERTICAL_FOV: f64 = 40.0;
const LIGHT_RADIUS: f64 = 3.0;
const SKY_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneName {
    /// One glossy sphere
    Sphere,
    /// Two glossy spheres side by side
    Spheres,
    /// A sphere over a mirror floor
    Mirror,
}

impl fmt::Display for SceneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneName::Sphere => "sphere",
            SceneName::Spheres => "spheres",
            SceneName::Mirror => "mirror",
        };
        write!(f, "{}", name)
    }
}

/// Build the named scene and a camera sized to `config`.
pub fn build(name: SceneName, config: &RenderConfig) -> RenderResult<(Scene, Camera)> {
    let camera = Camera::new(
        CAMERA_POSITION,
        Vec3::ZERO,
        Vec3::Y,
        config.width,
        config.height,
        VERTICAL_FOV,
    );

    let mut builder = SceneBuilder::new(Color::ZERO);
    builder.add_sphere(
        CAMERA_POSITION + Vec3::new(6.0, 6.0, 0.0) - Vec3::new(0.0, 0.0, LIGHT_RADIUS),
        LIGHT_RADIUS,
        MaterialData::light(Color::splat(8.0)),
    )?;

    match name {
        SceneName::Sphere => {
            builder.add_sphere(Vec3::ZERO, 1.0, grey_glossy(0.2, 1.3, 0.05))?;
        }
        SceneName::Spheres => {
            builder
                .add_sphere(Vec3::new(0.5, 0.0, 0.0), 0.4, grey_glossy(0.2, 1.3, 0.05))?
                .add_sphere(Vec3::new(-0.5, 0.0, 0.0), 0.4, grey_glossy(0.4, 1.5, 0.1))?;
        }
        SceneName::Mirror => {
            builder.add_sphere(Vec3::new(0.0, -0.2, 0.0), 0.6, grey_glossy(0.5, 1.4, 0.02))?;
            builder.add_quad(
                [
                    Vec3::new(-3.0, -0.8, -3.0),
                    Vec3::new(-3.0, -0.8, 3.0),
                    Vec3::new(3.0, -0.8, 3.0),
                    Vec3::new(3.0, -0.8, -3.0),
                ],
                MaterialData::reflective(Color::splat(0.3), 0.7, 2.0),
            );
        }
    }

    builder.add_sphere(Vec3::ZERO, SKY_RADIUS, MaterialData::diffuse(Color::new(0.2, 0.2, 0.5)))?;

    let scene = builder.build();
    log::debug!("Scene '{}' has {} primitives", name, scene.len());
    Ok((scene, camera))
}

/// Grey Fresnel surface; the cone angle is in radians.
fn grey_glossy(grey: f64, refraction_index: f64, cone_angle: f64) -> MaterialData {
    MaterialData::diffuse(Color::splat(grey))
        .with_refraction_index(refraction_index)
        .with_cone_angle(cone_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptrace_renderer::render;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> RenderConfig {
        RenderConfig::default()
            .with_resolution(16, 12)
            .with_quality(1, 2)
            .with_first_bounce(1, 1)
    }

    #[test]
    fn test_scene_sizes() {
        let config = small_config();
        let cases = [
            (SceneName::Sphere, 3),
            (SceneName::Spheres, 4),
            (SceneName::Mirror, 5),
        ];
        for (name, primitives) in cases {
            let (scene, camera) = build(name, &config).unwrap();
            assert_eq!(scene.len(), primitives, "{}", name);
            assert_eq!((camera.image_width(), camera.image_height()), (16, 12));
        }
    }

    #[test]
    fn test_preview_shows_sphere() {
        let mut config = small_config();
        config.preview = true;
        let (scene, camera) = build(SceneName::Sphere, &config).unwrap();

        let image = render(&scene, &camera, &config, &mut StdRng::seed_from_u64(0));
        assert!((image.get(8, 6) - Color::splat(0.2)).length() < 1e-12);
        assert!((image.get(0, 0) - Color::new(0.2, 0.2, 0.5)).length() < 1e-12);
    }

    #[test]
    fn test_display_matches_value_names() {
        for name in SceneName::value_variants() {
            let value = name.to_possible_value().unwrap();
            assert_eq!(value.get_name(), name.to_string());
        }
    }
}
