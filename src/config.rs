use crate::error::RasterError;
use crate::limits::Limits;

/// Settings for a fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Largest single read issued to a sequential source, in bytes.
    /// Must be non-zero.
    pub buffer_size: usize,
    pub limits: Limits,
}

impl FillConfig {
    pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RasterError> {
        if self.buffer_size == 0 {
            return Err(RasterError::InvalidConfig("buffer size is zero".into()));
        }
        Ok(())
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
            limits: Limits::default(),
        }
    }
}
