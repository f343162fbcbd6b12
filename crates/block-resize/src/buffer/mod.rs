//! Pixel buffer capability.
//!
//! The resize engine never touches a concrete image type. It works against
//! [`PixelBuffer`], which exposes dimensions, format and raw row bytes, plus
//! a factory for new buffers of the same kind. [`RasterImage`] is the crate's
//! in-memory implementation.

mod error;
mod raster;

pub use error::BufferError;
pub use raster::RasterImage;

/// Raw, row-addressable pixel storage.
///
/// Pixels are packed: each pixel occupies
/// [`bytes_per_pixel()`](PixelBuffer::bytes_per_pixel) consecutive bytes and
/// each row is a contiguous run of at least
/// [`bytes_per_row()`](PixelBuffer::bytes_per_row) bytes.
pub trait PixelBuffer {
    /// Create an empty buffer of the same concrete kind with the given
    /// dimensions and format.
    fn create(
        &self,
        width: u32,
        height: u32,
        channels: u8,
        bytes_per_channel: u8,
    ) -> Box<dyn PixelBuffer>;

    /// Deep copy of this buffer.
    fn clone_buffer(&self) -> Box<dyn PixelBuffer>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Channels per pixel (3 for RGB, 4 for RGBA).
    fn channels(&self) -> u8;

    fn bytes_per_channel(&self) -> u8;

    /// Raw bytes of row `y`.
    fn row(&self, y: u32) -> &[u8];

    /// Mutable raw bytes of row `y`.
    fn row_mut(&mut self, y: u32) -> &mut [u8];

    /// Create an empty buffer with this buffer's channel count and depth.
    fn create_same_format(&self, width: u32, height: u32) -> Box<dyn PixelBuffer> {
        self.create(width, height, self.channels(), self.bytes_per_channel())
    }

    #[inline]
    fn bytes_per_pixel(&self) -> usize {
        self.channels() as usize * self.bytes_per_channel() as usize
    }

    #[inline]
    fn bytes_per_row(&self) -> usize {
        self.width() as usize * self.bytes_per_pixel()
    }

    fn aspect_ratio(&self) -> f32 {
        self.width() as f32 / self.height() as f32
    }

    /// All pixel bytes, row after row, without any row padding.
    fn to_bytes(&self) -> Vec<u8> {
        let row_len = self.bytes_per_row();
        let mut bytes = Vec::with_capacity(row_len * self.height() as usize);
        for y in 0..self.height() {
            bytes.extend_from_slice(&self.row(y)[..row_len]);
        }
        bytes
    }
}

impl std::fmt::Debug for dyn PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("channels", &self.channels())
            .field("bytes_per_channel", &self.bytes_per_channel())
            .finish()
    }
}
