use crate::error::RasterError;

/// Resource limits checked before the output raster is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the output raster in bytes, padding included.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject dimensions beyond any configured width, height or pixel cap.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), RasterError> {
        if let Some(max_w) = self.max_width
            && u64::from(width) > max_w
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && u64::from(height) > max_h
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels
            && pixels > max_px
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        Ok(())
    }

    /// Reject a raster allocation of `bytes` above the memory cap.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), RasterError> {
        if let Some(max_mem) = self.max_memory_bytes
            && bytes as u64 > max_mem
        {
            return Err(RasterError::LimitExceeded(alloc::format!(
                "raster of {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}
