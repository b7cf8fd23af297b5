//! Core path tracing estimator.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation up to a fixed depth
//! - Stratified first-bounce sampling (N x M cells at depth 0)
//! - Progressive passes over the whole image

use std::time::Instant;

use rand::{Rng, RngCore};

use crate::{AccumulableImage, Camera, Color, Ray, RenderConfig, Scene};

/// Estimate the radiance carried back along `ray`.
///
/// Depth counts up from 0 at the camera; anything at or past
/// `config.max_depth` contributes no light.
pub fn radiance(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth >= config.max_depth {
        return Color::ZERO;
    }

    let Some(hit) = scene.intersect(ray) else {
        return scene.environment();
    };

    if config.preview {
        return hit.material.preview_colour();
    }

    let (u_samples, v_samples) = if depth == 0 {
        (config.first_bounce_u_samples, config.first_bounce_v_samples)
    } else {
        (1, 1)
    };

    let mut scattered = Color::ZERO;
    for i in 0..u_samples {
        for j in 0..v_samples {
            let u = (i as f64 + rng.gen::<f64>()) / u_samples as f64;
            let v = (j as f64 + rng.gen::<f64>()) / v_samples as f64;
            let prob = rng.gen::<f64>();

            let mut trace = |bounced: &Ray| radiance(bounced, scene, depth + 1, config, &mut *rng);
            scattered += hit.material.sample(&hit.record, ray, &mut trace, u, v, prob);
        }
    }

    let count = (u_samples * v_samples).max(1);
    hit.material.total_emission(scattered / count as f64)
}

/// Trace one camera ray through pixel (x, y).
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(x, y, rng);
    radiance(&ray, scene, 0, config, rng)
}

/// Render the scene single-threaded.
///
/// Every pass adds one sample to every pixel, so the image converges evenly
/// instead of finishing pixel by pixel.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> AccumulableImage {
    let (width, height) = (camera.image_width(), camera.image_height());
    if (width, height) != (config.width, config.height) {
        log::warn!(
            "Camera is {}x{} but config asks for {}x{}; using the camera size",
            width,
            height,
            config.width,
            config.height
        );
    }

    log::info!(
        "Rendering {}x{} at {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut image = AccumulableImage::new(width, height);
    for pass in 0..config.samples_per_pixel {
        for y in 0..height {
            for x in 0..width {
                let colour = render_pixel(scene, camera, x, y, config, rng);
                image.add_samples(x, y, colour, 1);
            }
        }
        log::debug!("Pass {}/{} done", pass + 1, config.samples_per_pixel);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
