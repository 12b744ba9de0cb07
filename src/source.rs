//! Pixel-data byte sources.
//!
//! A source is positioned at the first unread pixel byte and is only ever
//! read forward. What it can offer beyond that is a capability, chosen once
//! per fill through [`ByteSource::access`]: either the whole remaining
//! content as one slice, or plain bounded reads.

use crate::error::SourceError;

/// Capability view of a source for the duration of one fill.
pub enum Access<'s> {
    /// Remaining content is addressable memory; copies go range-to-range.
    Backed(&'s mut dyn RandomAccess),
    /// Only forward reads are available; copies go through bounded chunks.
    Sequential(&'s mut dyn SequentialRead),
}

/// Source whose remaining bytes are one contiguous slice, available
/// without blocking or further I/O.
pub trait RandomAccess {
    /// Bytes from the read cursor to the end of the source.
    fn remaining(&self) -> &[u8];

    /// Advance the read cursor by `n` bytes. `n` never exceeds
    /// `remaining().len()`.
    fn consume(&mut self, n: usize);
}

/// Forward-only source.
pub trait SequentialRead {
    /// Read up to `buf.len()` bytes, returning how many were written.
    /// `Ok(0)` for a non-empty `buf` means the source is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError>;
}

/// A pixel-data source the fillers can consume.
pub trait ByteSource {
    fn access(&mut self) -> Access<'_>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn access(&mut self) -> Access<'_> {
        (**self).access()
    }
}

// ── In-memory source ────────────────────────────────────────────────

/// In-memory source over a borrowed buffer.
///
/// Exposes itself as [`Access::Backed`], so fills from it never chunk.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start reading at `pos`, typically the pixel-data offset a container
    /// header pointed at. Positions past the end leave nothing to read.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl RandomAccess for SliceSource<'_> {
    fn remaining(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    fn consume(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }
}

impl SequentialRead for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let src = &self.data[self.pos..];
        let n = src.len().min(buf.len());
        buf[..n].copy_from_slice(&src[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl ByteSource for SliceSource<'_> {
    fn access(&mut self) -> Access<'_> {
        Access::Backed(self)
    }
}

// ── Forced sequential access ────────────────────────────────────────

/// Hides any backing of the wrapped reader; fills always take the
/// chunked path.
#[derive(Clone, Debug)]
pub struct Sequential<S>(pub S);

impl<S> Sequential<S> {
    pub fn new(inner: S) -> Self {
        Self(inner)
    }

    pub fn get_ref(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: SequentialRead> ByteSource for Sequential<S> {
    fn access(&mut self) -> Access<'_> {
        Access::Sequential(&mut self.0)
    }
}

// ── std::io adapter ─────────────────────────────────────────────────

/// Sequential source over any [`std::io::Read`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> SequentialRead for ReadSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        loop {
            match self.inner.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for ReadSource<R> {
    fn access(&mut self) -> Access<'_> {
        Access::Sequential(self)
    }
}
