use thiserror::Error;

/// Errors that can occur while moving pixels in and out of the raster surface
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("Snapshot is {found:?} but the surface is {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("Pixel buffer holds {found} bytes, expected {expected}")]
    BufferSize { expected: usize, found: usize },
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
