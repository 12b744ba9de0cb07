use alloc::vec::Vec;

use crate::header::ImageHeader;
use crate::stride::RowLayout;

/// A filled canonical raster: rows top-to-bottom, each `stride` bytes.
///
/// Pad bytes between a row's payload and the next row are zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    stride: usize,
    row_bytes: usize,
}

impl Raster {
    /// Zero-filled raster for a validated header and its layout.
    pub(crate) fn zeroed(header: &ImageHeader, layout: &RowLayout) -> Self {
        Self {
            pixels: alloc::vec![0u8; layout.len],
            width: header.width,
            height: header.height,
            bits_per_pixel: header.bits_per_pixel,
            stride: layout.stride,
            row_bytes: layout.row_bytes,
        }
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Access the pixel data, `height * stride` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Payload bytes per row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Full padded row `y`, counted from the top. `None` past the bottom.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let start = (y as usize).checked_mul(self.stride)?;
        self.pixels.get(start..start.checked_add(self.stride)?)
    }

    /// Row `y` without its trailing padding.
    pub fn row_payload(&self, y: u32) -> Option<&[u8]> {
        self.row(y).map(|r| &r[..self.row_bytes])
    }

    /// Padded rows, top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.stride)
    }

    /// Zero-copy strided view of the payload bytes.
    ///
    /// The view is `row_bytes` wide with a stride of `stride()`, so pad
    /// bytes are skipped without copying.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new_stride(
            &self.pixels,
            self.row_bytes,
            self.height as usize,
            self.stride,
        )
    }
}
