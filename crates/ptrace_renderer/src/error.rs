use thiserror::Error;

/// Errors raised while building scenes or producing images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Sphere radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("Image size mismatch: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Fragment of size {size:?} at {offset:?} does not fit a {bounds:?} image")]
    FragmentOutOfBounds {
        offset: (u32, u32),
        size: (u32, u32),
        bounds: (u32, u32),
    },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
