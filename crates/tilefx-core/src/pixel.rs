//! 8-bit RGB pixel type.
//!
//! Three independent channels, value range 0-255, no alpha. Pixels are plain
//! `Copy` data; buffers store them contiguously in row-major order.

/// An 8-bit RGB pixel.
///
/// # Example
///
/// ```rust
/// use tilefx_core::Pixel;
///
/// let p = Pixel::new(10, 20, 30);
/// assert_eq!(p.inverted(), Pixel::new(245, 235, 225));
/// assert_eq!(p.inverted().inverted(), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Pixel {
    /// Black (all channels 0). Also the [`Default`] value.
    pub const BLACK: Pixel = Pixel::splat(0);

    /// White (all channels 255).
    pub const WHITE: Pixel = Pixel::splat(255);

    /// Creates a pixel from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a pixel with all three channels set to `value`.
    #[inline]
    pub const fn splat(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the channel-wise inverse: each channel becomes `255 - v`.
    ///
    /// Inversion is an involution: `p.inverted().inverted() == p`.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

impl std::fmt::Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
