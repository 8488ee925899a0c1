use thiserror::Error;

/// Errors raised by the drawing surface. None of them reach the user:
/// the app logs them and skips the operation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("drawing surface is not available")]
    Unavailable,

    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("failed to encode or decode snapshot: {0}")]
    Image(#[from] image::ImageError),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
