//! Orientation normalization: pixel rows in, canonical raster out.
//!
//! Every fill reads its source strictly forward. Bottom-origin rows land in
//! reverse purely through destination offsets, so sources that cannot seek
//! work the same as in-memory ones.

use enough::Stop;

use crate::config::FillConfig;
use crate::copy;
use crate::error::RasterError;
use crate::header::ImageHeader;
use crate::orientation::Orientation;
use crate::raster::Raster;
use crate::source::{Access, ByteSource};
use crate::stride::RowLayout;

/// Fill a raster from a source whose rows follow `orientation`.
pub fn fill(
    orientation: Orientation,
    source: &mut dyn ByteSource,
    header: &ImageHeader,
    config: &FillConfig,
    stop: &dyn Stop,
) -> Result<Raster, RasterError> {
    match orientation {
        Orientation::TopLeft => fill_from_top_origin(source, header, config, stop),
        Orientation::BottomLeft => fill_from_bottom_origin(source, header, config, stop),
        Orientation::TopRight => fill_from_top_right_origin(source, header, config, stop),
        Orientation::BottomRight => fill_from_bottom_right_origin(source, header, config, stop),
    }
}

/// Fill from a source already in top-to-bottom order.
///
/// The source rows must be padded to the same stride as the output, so the
/// whole raster is one contiguous copy of `height * stride` bytes.
pub fn fill_from_top_origin(
    source: &mut dyn ByteSource,
    header: &ImageHeader,
    config: &FillConfig,
    stop: &dyn Stop,
) -> Result<Raster, RasterError> {
    let (_, mut raster) = prepare(header, config, stop)?;

    match source.access() {
        Access::Backed(backed) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = raster.pixels().len(), "top-origin fill, direct copy");
            copy::fill_direct(backed, raster.pixels_mut())?;
        }
        Access::Sequential(reader) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                len = raster.pixels().len(),
                chunk = config.buffer_size,
                "top-origin fill, chunked copy"
            );
            copy::fill_sequential(reader, raster.pixels_mut(), config.buffer_size, stop)?;
        }
    }
    Ok(raster)
}

/// Fill from a source whose first row is the bottom edge of the image.
///
/// Source rows are unpadded: each consumes `row_bytes` bytes, and lands at
/// destination row `height - 1 - i`. Pad bytes stay zero.
pub fn fill_from_bottom_origin(
    source: &mut dyn ByteSource,
    header: &ImageHeader,
    config: &FillConfig,
    stop: &dyn Stop,
) -> Result<Raster, RasterError> {
    let (layout, mut raster) = prepare(header, config, stop)?;
    let RowLayout {
        row_bytes, stride, ..
    } = layout;
    let needed = layout.payload_len();
    let dest_rows = raster.pixels_mut().chunks_exact_mut(stride).rev();

    match source.access() {
        Access::Backed(backed) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(rows = layout.height, row_bytes, "bottom-origin fill, direct copy");
            let available = backed.remaining().len();
            if available < needed {
                return Err(RasterError::TruncatedSource {
                    needed,
                    copied: available,
                });
            }
            for (row, dest) in dest_rows.enumerate() {
                if row % 16 == 0 {
                    stop.check()?;
                }
                copy::fill_direct(&mut *backed, &mut dest[..row_bytes])?;
            }
        }
        Access::Sequential(reader) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rows = layout.height,
                row_bytes,
                chunk = config.buffer_size,
                "bottom-origin fill, chunked copy per row"
            );
            for (row, dest) in dest_rows.enumerate() {
                copy::fill_sequential(
                    &mut *reader,
                    &mut dest[..row_bytes],
                    config.buffer_size,
                    stop,
                )
                .map_err(|e| match e {
                    RasterError::TruncatedSource { copied, .. } => RasterError::TruncatedSource {
                        needed,
                        copied: row * row_bytes + copied,
                    },
                    other => other,
                })?;
            }
        }
    }
    Ok(raster)
}

/// Horizontally mirrored, top-origin rows. Not supported: always fails with
/// [`RasterError::UnsupportedOrientation`] without touching the source.
pub fn fill_from_top_right_origin(
    _source: &mut dyn ByteSource,
    _header: &ImageHeader,
    _config: &FillConfig,
    _stop: &dyn Stop,
) -> Result<Raster, RasterError> {
    Err(RasterError::UnsupportedOrientation(Orientation::TopRight))
}

/// Horizontally mirrored, bottom-origin rows. Not supported: always fails
/// with [`RasterError::UnsupportedOrientation`] without touching the source.
pub fn fill_from_bottom_right_origin(
    _source: &mut dyn ByteSource,
    _header: &ImageHeader,
    _config: &FillConfig,
    _stop: &dyn Stop,
) -> Result<Raster, RasterError> {
    Err(RasterError::UnsupportedOrientation(Orientation::BottomRight))
}

/// Validate inputs, check limits and allocate the zeroed output.
fn prepare(
    header: &ImageHeader,
    config: &FillConfig,
    stop: &dyn Stop,
) -> Result<(RowLayout, Raster), RasterError> {
    header.validate()?;
    config.validate()?;
    config.limits.check(header.width, header.height)?;
    let layout = RowLayout::new(header)?;
    config.limits.check_memory(layout.len)?;
    stop.check()?;
    Ok((layout, Raster::zeroed(header, &layout)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Sequential, SliceSource};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use enough::{StopReason, Unstoppable};

    struct Cancelled;

    /// Passes `allowed` checks, then cancels.
    struct CancelAfter {
        allowed: AtomicUsize,
    }

    impl CancelAfter {
        fn new(allowed: usize) -> Self {
            Self {
                allowed: AtomicUsize::new(allowed),
            }
        }
    }

    impl Stop for CancelAfter {
        fn check(&self) -> Result<(), StopReason> {
            self.allowed
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
                .map(|_| ())
                .map_err(|_| StopReason::Cancelled)
        }
    }

    impl Stop for Cancelled {
        fn check(&self) -> Result<(), StopReason> {
            Err(StopReason::Cancelled)
        }
    }

    fn rows(height: usize, row_bytes: usize) -> Vec<u8> {
        (0..height * row_bytes)
            .map(|i| ((i / row_bytes) * 16 + i % row_bytes) as u8)
            .collect()
    }

    #[test]
    fn top_origin_is_identity() {
        let header = ImageHeader::new(3, 4, 24);
        let data = rows(4, 12);
        let raster = fill_from_top_origin(
            &mut SliceSource::new(&data),
            &header,
            &FillConfig::default(),
            &Unstoppable,
        )
        .unwrap();
        assert_eq!(raster.pixels(), &data[..]);
    }

    #[test]
    fn bottom_origin_reverses_rows() {
        let header = ImageHeader::new(2, 3, 16);
        let data = rows(3, 4);
        let raster = fill_from_bottom_origin(
            &mut SliceSource::new(&data),
            &header,
            &FillConfig::default(),
            &Unstoppable,
        )
        .unwrap();
        assert_eq!(raster.row(0).unwrap(), &data[8..12]);
        assert_eq!(raster.row(1).unwrap(), &data[4..8]);
        assert_eq!(raster.row(2).unwrap(), &data[0..4]);
    }

    #[test]
    fn bottom_origin_leaves_padding_zero() {
        let header = ImageHeader::new(1, 3, 24);
        let data = [0xFFu8; 9];
        for chunk in [1, 2, 64] {
            let config = FillConfig::default().with_buffer_size(chunk);
            let raster = fill_from_bottom_origin(
                &mut Sequential::new(SliceSource::new(&data)),
                &header,
                &config,
                &Unstoppable,
            )
            .unwrap();
            assert_eq!(
                raster.pixels(),
                &[255, 255, 255, 0, 255, 255, 255, 0, 255, 255, 255, 0]
            );
        }
    }

    #[test]
    fn bottom_origin_consumes_only_payload() {
        let header = ImageHeader::new(1, 2, 24);
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];

        let mut backed = SliceSource::new(&data);
        fill_from_bottom_origin(&mut backed, &header, &FillConfig::default(), &Unstoppable)
            .unwrap();
        assert_eq!(backed.position(), 6);

        let mut streamed = Sequential::new(SliceSource::new(&data));
        fill_from_bottom_origin(&mut streamed, &header, &FillConfig::default(), &Unstoppable)
            .unwrap();
        assert_eq!(streamed.get_ref().position(), 6);
    }

    #[test]
    fn truncation_reports_totals() {
        let header = ImageHeader::new(2, 3, 16);
        let data = rows(3, 4);
        let short = &data[..11];

        let err = fill_from_bottom_origin(
            &mut Sequential::new(SliceSource::new(short)),
            &header,
            &FillConfig::default().with_buffer_size(3),
            &Unstoppable,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RasterError::TruncatedSource {
                needed: 12,
                copied: 11
            }
        ));

        let err = fill_from_bottom_origin(
            &mut SliceSource::new(short),
            &header,
            &FillConfig::default(),
            &Unstoppable,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RasterError::TruncatedSource {
                needed: 12,
                copied: 11
            }
        ));
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let header = ImageHeader::new(4, 2, 8);
        let data = rows(2, 4);
        let config = FillConfig::default();
        let via_fill = fill(
            Orientation::BottomLeft,
            &mut SliceSource::new(&data),
            &header,
            &config,
            &Unstoppable,
        )
        .unwrap();
        let direct =
            fill_from_bottom_origin(&mut SliceSource::new(&data), &header, &config, &Unstoppable)
                .unwrap();
        assert_eq!(via_fill, direct);
    }

    #[test]
    fn right_origins_reject_even_invalid_input() {
        let header = ImageHeader::new(0, 0, 3);
        let config = FillConfig::default().with_buffer_size(0);
        let mut src = SliceSource::new(&[]);
        for orientation in [Orientation::TopRight, Orientation::BottomRight] {
            let err = fill(orientation, &mut src, &header, &config, &Cancelled).unwrap_err();
            assert!(
                matches!(err, RasterError::UnsupportedOrientation(o) if o == orientation),
                "{err:?}"
            );
        }
    }

    #[test]
    fn zero_buffer_size_is_rejected() {
        let header = ImageHeader::new(1, 1, 8);
        let config = FillConfig::default().with_buffer_size(0);
        let err = fill_from_top_origin(
            &mut SliceSource::new(&[0u8; 4]),
            &header,
            &config,
            &Unstoppable,
        )
        .unwrap_err();
        assert!(matches!(err, RasterError::InvalidConfig(_)));
    }

    #[test]
    fn cancellation_stops_before_reading() {
        let header = ImageHeader::new(2, 2, 32);
        let data = vec![7u8; 16];
        let mut src = SliceSource::new(&data);
        let err = fill_from_bottom_origin(&mut src, &header, &FillConfig::default(), &Cancelled)
            .unwrap_err();
        assert!(matches!(err, RasterError::Cancelled(_)));
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn cancellation_between_chunks() {
        // 16-byte rows read in 4-byte chunks: one check in prepare, four for
        // the first row, then the first chunk of row two cancels.
        let header = ImageHeader::new(4, 40, 32);
        let data = rows(40, 16);
        let mut src = Sequential::new(SliceSource::new(&data));
        let config = FillConfig::default().with_buffer_size(4);
        let err = fill_from_bottom_origin(&mut src, &header, &config, &CancelAfter::new(5))
            .unwrap_err();
        assert!(matches!(err, RasterError::Cancelled(StopReason::Cancelled)));
        assert_eq!(src.get_ref().position(), 16);
    }

    #[test]
    fn cancellation_every_16_rows_on_backed_source() {
        // One check in prepare, one at row 0; row 16 cancels.
        let header = ImageHeader::new(4, 40, 32);
        let data = rows(40, 16);
        let mut src = SliceSource::new(&data);
        let err = fill_from_bottom_origin(
            &mut src,
            &header,
            &FillConfig::default(),
            &CancelAfter::new(2),
        )
        .unwrap_err();
        assert!(matches!(err, RasterError::Cancelled(StopReason::Cancelled)));
        assert_eq!(src.position(), 16 * 16);
    }

    #[test]
    fn cancellation_during_top_origin_chunks() {
        let header = ImageHeader::new(4, 4, 32);
        let data = rows(4, 16);
        let mut src = Sequential::new(SliceSource::new(&data));
        let config = FillConfig::default().with_buffer_size(8);
        let err = fill_from_top_origin(&mut src, &header, &config, &CancelAfter::new(3))
            .unwrap_err();
        assert!(matches!(err, RasterError::Cancelled(_)));
        assert_eq!(src.get_ref().position(), 16);
    }
}
