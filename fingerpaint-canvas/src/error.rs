//! Error types for fingerpaint-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Color token not present in the palette.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Brush width must be positive and at most `MAX_BRUSH_WIDTH`.
    #[error("Invalid brush size: {0} (must be positive and at most 4096)")]
    InvalidBrushSize(f32),

    /// A stroke was finished without a single segment.
    ///
    /// The drawing surface absorbs this one; it only escapes from
    /// [`Stroke`](crate::Stroke) constructors.
    #[error("Stroke has no segments")]
    EmptyStroke,

    /// Drawing or export was requested before the surface was given a size.
    #[error("Surface has no raster yet; call resize first")]
    SurfaceNotReady,

    /// Invalid raster dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Background pixel data does not match its declared size.
    #[error("Invalid background image: {0}")]
    InvalidBackground(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// Filesystem error while writing an export.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The export worker could not accept or answer a request.
    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::PngError(err.to_string())
    }
}
