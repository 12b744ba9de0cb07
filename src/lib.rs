//! # zenraster
//!
//! Orientation-normalizing raster filler for uncompressed bitmap pixel data.
//!
//! A container parser (BMP, Targa, DIB, ...) reads the header and hands over
//! the image dimensions plus a byte source positioned at the first pixel
//! byte. This crate turns that into one canonical raster: rows
//! top-to-bottom, each padded to a 4-byte [`stride`].
//!
//! ## Copy strategies
//!
//! Sources advertise a capability through [`ByteSource::access`]:
//!
//! - **Backed** sources ([`SliceSource`]) expose their remaining bytes as a
//!   slice, and fills copy range-to-range with no chunking.
//! - **Sequential** sources ([`Sequential`], `ReadSource` with the `std`
//!   feature) are read forward in chunks of at most
//!   [`FillConfig::buffer_size`] bytes, directly into the output.
//!
//! Both produce byte-identical rasters. Bottom-origin sources are never read
//! backward: rows are placed in reverse through destination offsets only.
//!
//! ## Orientations
//!
//! [`Orientation::TopLeft`] and [`Orientation::BottomLeft`] are supported.
//! The right-originated (horizontally mirrored) conventions always fail
//! with [`RasterError::UnsupportedOrientation`].
//!
//! ## Usage
//!
//! ```
//! use zenraster::{FillConfig, ImageHeader, Orientation, SliceSource, Unstoppable};
//!
//! // 1x3 BGR image stored bottom row first, rows unpadded
//! let data = [1u8, 1, 1, 2, 2, 2, 3, 3, 3];
//! let header = ImageHeader::new(1, 3, 24);
//!
//! let raster = zenraster::fill(
//!     Orientation::BottomLeft,
//!     &mut SliceSource::new(&data),
//!     &header,
//!     &FillConfig::default(),
//!     &Unstoppable,
//! )?;
//! assert_eq!(raster.stride(), 4);
//! assert_eq!(raster.pixels(), &[3, 3, 3, 0, 2, 2, 2, 0, 1, 1, 1, 0]);
//! # Ok::<(), zenraster::RasterError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod config;
mod copy;
mod error;
mod fill;
mod header;
mod limits;
mod orientation;
mod raster;
mod source;
mod stride;

// Re-exports
pub use config::FillConfig;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{RasterError, SourceError};
pub use fill::{
    fill, fill_from_bottom_origin, fill_from_bottom_right_origin, fill_from_top_origin,
    fill_from_top_right_origin,
};
pub use header::ImageHeader;
pub use limits::Limits;
pub use orientation::Orientation;
pub use raster::Raster;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{Access, ByteSource, RandomAccess, Sequential, SequentialRead, SliceSource};
pub use stride::{RowLayout, row_bytes, stride};
