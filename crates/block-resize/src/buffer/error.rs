//! Error type for buffer construction.

use std::fmt;

/// Error returned when raw bytes cannot form a [`RasterImage`](super::RasterImage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Channel count or bytes per channel is zero
    EmptyFormat {
        /// Channels per pixel requested
        channels: u8,
        /// Bytes per channel requested
        bytes_per_channel: u8,
    },
    /// Byte length does not match `width * height * bytes_per_pixel`
    LengthMismatch {
        /// Bytes required by the dimensions and format
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyFormat {
                channels,
                bytes_per_channel,
            } => write!(
                f,
                "invalid pixel format: {} channels of {} bytes",
                channels, bytes_per_channel
            ),
            BufferError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel data length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for BufferError {}
