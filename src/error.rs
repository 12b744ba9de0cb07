use alloc::string::String;
use enough::StopReason;

use crate::orientation::Orientation;

/// Errors from raster filling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RasterError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported scanline orientation: {0:?}")]
    UnsupportedOrientation(Orientation),

    #[error("truncated pixel data: need {needed} bytes, source yielded {copied}")]
    TruncatedSource { needed: usize, copied: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RasterError {
    fn from(r: StopReason) -> Self {
        RasterError::Cancelled(r)
    }
}

/// Failure reported by a [`SequentialRead`](crate::SequentialRead) source.
///
/// The fillers surface any read failure as [`RasterError::TruncatedSource`].
#[derive(Debug, thiserror::Error)]
#[error("source read failed: {message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::new(alloc::format!("{e}"))
    }
}
