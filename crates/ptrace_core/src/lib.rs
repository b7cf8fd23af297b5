//! ptrace core - settings shared by the renderer and its front ends.
//!
//! This crate provides:
//!
//! - **Material settings**: `MaterialData` and its preset constructors
//! - **Render parameters**: `RenderConfig`, loaded from JSON and validated
//!   before any rendering starts
//! - **Colour helpers**: conversion of linear radiance to display bytes
//!
//! # Example
//!
//! ```ignore
//! use ptrace_core::params::load_params;
//!
//! let config = load_params("params.json")?;
//! println!("Rendering {}x{} @ {} spp", config.width, config.height, config.samples_per_pixel);
//! ```

pub mod colour;
pub mod material;
pub mod params;

// Re-export commonly used types
pub use colour::{colour_to_bytes, Color};
pub use material::MaterialData;
pub use params::{load_params, ParamsError, ParamsResult, RenderConfig};
