//! Assertion helpers for tests.

use block_resize::PixelBuffer;
use pretty_assertions::assert_eq;

/// Assert a buffer has the expected dimensions and format
pub fn assert_format(buffer: &dyn PixelBuffer, width: u32, height: u32, channels: u8) {
    assert_eq!(
        (buffer.width(), buffer.height(), buffer.channels(), buffer.bytes_per_channel()),
        (width, height, channels, 1),
        "Unexpected buffer format"
    );
}

/// Assert every pixel of a buffer equals `pixel`
pub fn assert_uniform(buffer: &dyn PixelBuffer, pixel: &[u8]) {
    let bytes = buffer.to_bytes();
    for (i, actual) in bytes.chunks_exact(pixel.len()).enumerate() {
        assert_eq!(actual, pixel, "Pixel {} differs", i);
    }
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
