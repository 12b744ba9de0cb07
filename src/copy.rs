//! The two copy strategies behind every fill.
//!
//! Both must leave identical bytes in the destination; the direct path
//! only skips chunking and read bookkeeping.

use enough::Stop;

use crate::error::RasterError;
use crate::source::{RandomAccess, SequentialRead};

/// Copy `dest.len()` bytes from a forward-only reader, reading straight
/// into `dest` in windows of at most `chunk_size` bytes.
///
/// Any failed read or early end of data is a
/// [`RasterError::TruncatedSource`]; `dest` is then only partially written
/// and the caller must discard it.
pub(crate) fn fill_sequential(
    reader: &mut dyn SequentialRead,
    dest: &mut [u8],
    chunk_size: usize,
    stop: &dyn Stop,
) -> Result<(), RasterError> {
    debug_assert!(chunk_size > 0);
    let needed = dest.len();
    let mut copied = 0usize;

    for window in dest.chunks_mut(chunk_size) {
        stop.check()?;
        let mut filled = 0usize;
        while filled < window.len() {
            let n = match reader.read(&mut window[filled..]) {
                Ok(0) => return Err(truncated(needed, copied + filled)),
                Ok(n) => n,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %_e, needed, copied = copied + filled, "source read failed");
                    return Err(truncated(needed, copied + filled));
                }
            };
            filled += n.min(window.len() - filled);
        }
        copied += filled;
    }
    Ok(())
}

/// Copy `dest.len()` bytes from the front of a backed source in one step.
///
/// Nothing is consumed when the source holds fewer bytes than `dest`.
pub(crate) fn fill_direct(
    backed: &mut dyn RandomAccess,
    dest: &mut [u8],
) -> Result<(), RasterError> {
    let remaining = backed.remaining();
    let Some(src) = remaining.get(..dest.len()) else {
        return Err(truncated(dest.len(), remaining.len()));
    };
    dest.copy_from_slice(src);
    backed.consume(dest.len());
    Ok(())
}

fn truncated(needed: usize, copied: usize) -> RasterError {
    #[cfg(feature = "tracing")]
    tracing::debug!(needed, copied, "pixel data truncated");
    RasterError::TruncatedSource { needed, copied }
}
