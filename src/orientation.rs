/// Which corner of the image the first row of pixel data represents.
///
/// Containers that support several scanline orders (Targa most notably)
/// record this in their header. The right-originated variants describe
/// horizontally mirrored rows; the filler rejects them explicitly rather
/// than producing a mirrored image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// First row is the top edge, first pixel the left edge.
    TopLeft,
    /// First row is the bottom edge, first pixel the left edge.
    ///
    /// The usual order for BMP and Targa.
    #[default]
    BottomLeft,
    /// First row is the top edge, first pixel the right edge.
    TopRight,
    /// First row is the bottom edge, first pixel the right edge.
    BottomRight,
}

impl Orientation {
    /// Bit 4 of a Targa image descriptor: pixels run right-to-left.
    pub const DESCRIPTOR_RIGHT: u8 = 0x10;
    /// Bit 5 of a Targa image descriptor: rows run top-to-bottom.
    pub const DESCRIPTOR_TOP: u8 = 0x20;

    /// Decode the origin bits of a Targa-style image descriptor byte.
    ///
    /// All other bits (alpha depth, interleave) are ignored.
    pub const fn from_descriptor(descriptor: u8) -> Self {
        let right = descriptor & Self::DESCRIPTOR_RIGHT != 0;
        let top = descriptor & Self::DESCRIPTOR_TOP != 0;
        match (top, right) {
            (true, false) => Self::TopLeft,
            (false, false) => Self::BottomLeft,
            (true, true) => Self::TopRight,
            (false, true) => Self::BottomRight,
        }
    }

    pub const fn is_top_origin(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub const fn is_right_origin(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Whether [`crate::fill`] can normalize this orientation.
    pub const fn is_supported(self) -> bool {
        !self.is_right_origin()
    }
}
