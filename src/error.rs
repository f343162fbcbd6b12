use block_resize::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Unsupported scale: {from_width} -> {to_width} is less than a 2:1 reduction")]
    UnsupportedScale { from_width: u32, to_width: u32 },

    #[error("Invalid kernel size: {0}")]
    InvalidKernelSize(u32),

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
