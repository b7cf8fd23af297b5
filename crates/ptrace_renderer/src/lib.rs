//! ptrace renderer - CPU Monte Carlo path tracing.
//!
//! Scenes are flat lists of spheres and triangles scanned linearly. Each
//! camera ray is followed through recursive material sampling up to a fixed
//! depth and the results are accumulated into an [`AccumulableImage`].
//! Work can run as a single-threaded pass loop ([`render`]) or as sorted
//! tiles spread over a rayon pool ([`render_tiled`]).

mod accumulator;
mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod scene;
mod sphere;
mod tile;
mod triangle;

pub use accumulator::AccumulableImage;
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, INTERSECT_EPSILON};
pub use material::Material;
pub use renderer::{radiance, render, render_pixel};
pub use scene::{Primitive, Scene, SceneBuilder, SceneHit, Shape};
pub use sphere::Sphere;
pub use tile::{
    generate_tiles, render_tile, render_tiled, render_tiled_with_progress, Tile, TileResult,
};
pub use triangle::Triangle;

/// Re-export the shared settings and math types
pub use ptrace_core::{Color, MaterialData, RenderConfig};
pub use ptrace_math::{Ray, Vec3};
