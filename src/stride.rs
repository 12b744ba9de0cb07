//! Row stride computation.
//!
//! Bitmap containers pad every scanline to a 4-byte boundary regardless of
//! the declared pixel width, so the distance between rows is the padded
//! stride, not the payload length.

use crate::error::RasterError;
use crate::header::ImageHeader;

/// Payload bytes in one row: `width * bits_per_pixel / 8`, without padding.
pub const fn row_bytes(width: u32, bits_per_pixel: u32) -> u64 {
    (width as u64 * bits_per_pixel as u64) / 8
}

/// Row length in bytes rounded up to the next multiple of 4.
///
/// Total for any input: the math is done in `u64`, where
/// `u32::MAX * u32::MAX / 8 + 3` cannot overflow.
pub const fn stride(width: u32, bits_per_pixel: u32) -> u64 {
    (row_bytes(width, bits_per_pixel) + 3) & !3
}

/// Byte geometry of a canonical raster, in addressable units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Payload bytes per row.
    pub row_bytes: usize,
    /// Padded bytes per row, a multiple of 4.
    pub stride: usize,
    pub height: usize,
    /// `height * stride`.
    pub len: usize,
}

impl RowLayout {
    /// Compute the layout for a validated header.
    ///
    /// Fails with [`RasterError::DimensionsTooLarge`] when the raster
    /// cannot be addressed on this target.
    pub fn new(header: &ImageHeader) -> Result<Self, RasterError> {
        let ImageHeader {
            width,
            height,
            bits_per_pixel,
        } = *header;
        let too_large = || RasterError::DimensionsTooLarge { width, height };

        let row_bytes =
            usize::try_from(row_bytes(width, bits_per_pixel)).map_err(|_| too_large())?;
        let stride = usize::try_from(stride(width, bits_per_pixel)).map_err(|_| too_large())?;
        let height = usize::try_from(height).map_err(|_| too_large())?;
        let len = stride.checked_mul(height).ok_or_else(too_large)?;

        Ok(Self {
            row_bytes,
            stride,
            height,
            len,
        })
    }

    /// Bytes a bottom-origin fill consumes: rows are read unpadded.
    pub fn payload_len(&self) -> usize {
        // row_bytes <= stride, so this cannot overflow once len did not
        self.row_bytes * self.height
    }

    /// Trailing pad bytes at the end of each row.
    pub fn padding(&self) -> usize {
        self.stride - self.row_bytes
    }
}
