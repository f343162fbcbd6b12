//! block-resize: fixed-ratio block resampling for 8-bit RGB/RGBA rasters
//!
//! The crate has two parts:
//!
//! - **Kernels** ([`Kernel`], [`KernelVariant`]): normalized separable weight
//!   matrices built from bicubic, triangular, bell (quadratic B-spline) and
//!   Lanczos shapes.
//! - **Engine** ([`resize()`]): block decimation. Every destination pixel is
//!   the kernel-weighted sum of a `k × k` source block.
//!
//! The engine works against the [`PixelBuffer`] trait; [`RasterImage`] is the
//! bundled in-memory implementation.
//!
//! # Quick Start
//!
//! ```
//! use block_resize::{resize, AspectRatioPolicy, PixelBuffer, RasterImage};
//!
//! let source = RasterImage::filled(64, 48, &[12, 34, 56, 255]);
//! let thumb = resize(&source, 16, 12, AspectRatioPolicy::KeepAspectRatio);
//!
//! assert_eq!((thumb.width(), thumb.height()), (16, 12));
//! assert_eq!(thumb.channels(), 4);
//! ```
//!
//! # Block Alignment
//!
//! ```text
//! source (W = 8)            destination (w = 2), k = floor(8 / 2) = 4
//! +-------+-------+
//! | block | block |         +---+---+
//! | (0,0) | (4,0) |   -->   | a | b |
//! +-------+-------+         +---+---+
//! | (0,4) | (4,4) |         | c | d |
//! +-------+-------+         +---+---+
//! ```
//!
//! The ratio `k` comes from the widths only and is applied to rows as well.
//! Non-integer ratios are truncated, and blocks that fall past the bottom or
//! right edge are clipped.
//!
//! # Formats
//!
//! Only 3- and 4-channel buffers with one byte per channel are resampled.
//! Anything else, and any request for the source's own dimensions, returns a
//! copy of the source. Channels are processed by byte position, so RGBA,
//! BGRA and ARGB layouts all pass through unchanged.

pub mod buffer;
pub mod geometry;
pub mod kernel;
pub mod resize;


pub use buffer::{BufferError, PixelBuffer, RasterImage};
pub use geometry::Size;
pub use kernel::{Kernel, KernelVariant, DEFAULT_LANCZOS_LOBES, TRIANGULAR_SIZE};
pub use resize::{
    downscale_ratio, is_supported_format, resize, resize_with, AspectRatioPolicy, ResizeMethod,
    ResizeOptions, BICUBIC_SHARPNESS,
};
