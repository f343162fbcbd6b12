//! In-memory [`PixelBuffer`] backed by a single `Vec<u8>`.

use super::{BufferError, PixelBuffer};

/// Row-major packed pixels with no row padding.
///
/// # Example
///
/// ```
/// use block_resize::{PixelBuffer, RasterImage};
///
/// let image = RasterImage::filled(4, 2, &[10, 20, 30]);
/// assert_eq!(image.channels(), 3);
/// assert_eq!(image.row(1), &[10, 20, 30, 10, 20, 30, 10, 20, 30, 10, 20, 30]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    bytes_per_channel: u8,
}

impl RasterImage {
    /// Zero-filled image.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts a non-empty pixel format.
    pub fn new(width: u32, height: u32, channels: u8, bytes_per_channel: u8) -> Self {
        debug_assert!(
            channels > 0 && bytes_per_channel > 0,
            "pixel format must be non-empty"
        );
        let len = width as usize * height as usize * channels as usize * bytes_per_channel as usize;
        Self {
            data: vec![0; len],
            width,
            height,
            channels,
            bytes_per_channel,
        }
    }

    /// Wrap existing bytes, validating length against the format.
    pub fn from_bytes(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
        bytes_per_channel: u8,
    ) -> Result<Self, BufferError> {
        if channels == 0 || bytes_per_channel == 0 {
            return Err(BufferError::EmptyFormat {
                channels,
                bytes_per_channel,
            });
        }
        let expected =
            width as usize * height as usize * channels as usize * bytes_per_channel as usize;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            bytes_per_channel,
        })
    }

    /// 8-bit image where every pixel equals `pixel`; the channel count is
    /// `pixel.len()`.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * pixel.len())
            .collect();
        Self {
            data,
            width,
            height,
            channels: pixel.len() as u8,
            bytes_per_channel: 1,
        }
    }

    /// Bytes of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let bpp = self.bytes_per_pixel();
        let start = self.offset(y) + x as usize * bpp;
        &self.data[start..start + bpp]
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) {
        let bpp = self.bytes_per_pixel();
        let start = self.offset(y) + x as usize * bpp;
        self.data[start..start + bpp].copy_from_slice(pixel);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, y: u32) -> usize {
        debug_assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        y as usize * self.bytes_per_row()
    }
}

impl PixelBuffer for RasterImage {
    fn create(
        &self,
        width: u32,
        height: u32,
        channels: u8,
        bytes_per_channel: u8,
    ) -> Box<dyn PixelBuffer> {
        Box::new(RasterImage::new(width, height, channels, bytes_per_channel))
    }

    fn clone_buffer(&self) -> Box<dyn PixelBuffer> {
        Box::new(self.clone())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn channels(&self) -> u8 {
        self.channels
    }

    fn bytes_per_channel(&self) -> u8 {
        self.bytes_per_channel
    }

    fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(y);
        &self.data[start..start + self.bytes_per_row()]
    }

    fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.offset(y);
        let len = self.bytes_per_row();
        &mut self.data[start..start + len]
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}
