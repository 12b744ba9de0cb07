use crate::error::RasterError;

/// Image dimensions as extracted by a container parser.
///
/// The filler trusts the container to have read these fields, but
/// [`validate`](Self::validate) runs at every public entry point anyway:
/// a zero dimension or a sub-byte depth would make the stride meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
}

impl ImageHeader {
    pub const fn new(width: u32, height: u32, bits_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
        }
    }

    /// Bytes per pixel. Only meaningful once the header has been validated.
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel / 8
    }

    pub fn validate(&self) -> Result<(), RasterError> {
        if self.width == 0 {
            return Err(RasterError::InvalidHeader("width is zero".into()));
        }
        if self.height == 0 {
            return Err(RasterError::InvalidHeader("height is zero".into()));
        }
        if self.bits_per_pixel == 0 || !self.bits_per_pixel.is_multiple_of(8) {
            return Err(RasterError::InvalidHeader(alloc::format!(
                "bits per pixel {} is not a positive multiple of 8",
                self.bits_per_pixel
            )));
        }
        Ok(())
    }
}
