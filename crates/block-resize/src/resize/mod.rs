//! Fixed-ratio block resize engine.
//!
//! Each destination pixel `(x, y)` is the kernel-weighted sum of the
//! `k × k` source block whose origin is `(x·k, y·k)`, where
//! `k = floor(source_width / target_width)`. The ratio is derived from the
//! width alone and applied to both axes.
//!
//! Blocks that run past the source edge are clipped without renormalizing,
//! so they lose the weight of the missing samples.

mod channels;
mod options;

pub use channels::{round_channel, unpack_pixel, ChannelSums, MAX_CHANNELS};
pub use options::{AspectRatioPolicy, ResizeMethod, ResizeOptions};

use crate::buffer::PixelBuffer;
use crate::kernel::Kernel;

/// Sharpening parameter of the block bicubic kernel.
pub const BICUBIC_SHARPNESS: f32 = 0.5;

/// Integer source pixels per destination pixel, derived from the width.
///
/// Never returns less than 1, so a kernel can always be built; ratios of 1
/// produce a degenerate bicubic kernel (see [`Kernel::is_degenerate()`]).
///
/// # Panics
///
/// Panics if `target_width` is zero.
#[inline]
pub fn downscale_ratio(source_width: u32, target_width: u32) -> u32 {
    (source_width / target_width).max(1)
}

/// Source coordinate of block `index`. Saturates, so an origin that would
/// overflow lies past any source edge and yields an empty block.
#[inline]
pub fn block_origin(index: u32, ratio: u32) -> u32 {
    index.saturating_mul(ratio)
}

/// Whether the engine resamples this buffer or falls back to a copy.
pub fn is_supported_format(buffer: &dyn PixelBuffer) -> bool {
    matches!(buffer.channels(), 3 | 4) && buffer.bytes_per_channel() == 1
}

/// Resize `source` to exactly `target_width × target_height`.
///
/// Returns a copy of `source` instead when the dimensions already match or
/// the format is not 8-bit RGB/RGBA. `_aspect_ratio` is accepted for API
/// stability and currently has no effect.
///
/// # Example
///
/// ```
/// use block_resize::{resize, AspectRatioPolicy, PixelBuffer, RasterImage};
///
/// let source = RasterImage::filled(8, 8, &[40, 80, 120]);
/// let result = resize(&source, 2, 2, AspectRatioPolicy::KeepAspectRatio);
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.to_bytes(), [40, 80, 120].repeat(4));
/// ```
pub fn resize(
    source: &dyn PixelBuffer,
    target_width: u32,
    target_height: u32,
    _aspect_ratio: AspectRatioPolicy,
) -> Box<dyn PixelBuffer> {
    if target_width == source.width() && target_height == source.height() {
        return source.clone_buffer();
    }
    if !is_supported_format(source) {
        return source.clone_buffer();
    }

    let ratio = downscale_ratio(source.width(), target_width);
    let kernel = Kernel::bicubic(ratio, BICUBIC_SHARPNESS);
    let channels = source.channels() as usize;

    let mut dest = source.create_same_format(target_width, target_height);
    for y in 0..target_height {
        let row = dest.row_mut(y);
        for (x, out) in row
            .chunks_exact_mut(channels)
            .take(target_width as usize)
            .enumerate()
        {
            let sums = convolve_block(
                &kernel,
                source,
                block_origin(x as u32, ratio),
                block_origin(y, ratio),
            );
            sums.pack_into(out);
        }
    }

    dest
}

/// [`resize()`] driven by a [`ResizeOptions`] value.
pub fn resize_with(source: &dyn PixelBuffer, options: &ResizeOptions) -> Box<dyn PixelBuffer> {
    match options.method {
        ResizeMethod::Bicubic => resize(source, options.width, options.height, options.aspect_ratio),
    }
}

/// Weighted channel sums of the block at `(origin_x, origin_y)`.
///
/// Kernel rows and columns beyond the source edge are skipped.
pub fn convolve_block(
    kernel: &Kernel,
    source: &dyn PixelBuffer,
    origin_x: u32,
    origin_y: u32,
) -> ChannelSums {
    let channels = source.channels() as usize;
    let mut sums = ChannelSums::new(channels);

    let size = kernel.size();
    let row_end = origin_y.saturating_add(size).min(source.height());
    let col_end = origin_x.saturating_add(size).min(source.width());

    for (kernel_row, y) in (origin_y..row_end).enumerate() {
        let line = source.row(y);
        for (kernel_col, x) in (origin_x..col_end).enumerate() {
            let weight = kernel.weight(kernel_col as u32, kernel_row as u32);
            sums.accumulate(unpack_pixel(line, x as usize, channels), weight);
        }
    }

    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RasterImage;

    #[test]
    fn test_downscale_ratio_is_width_driven() {
        assert_eq!(downscale_ratio(800, 200), 4);
        assert_eq!(downscale_ratio(801, 200), 4);
        assert_eq!(downscale_ratio(799, 200), 3);
        assert_eq!(downscale_ratio(100, 200), 1);
    }

    #[test]
    fn test_block_origin_saturates() {
        assert_eq!(block_origin(3, 4), 12);
        assert_eq!(block_origin(3_000_000, 2000), u32::MAX);
    }

    #[test]
    fn test_tall_target_does_not_overflow_origin() {
        // k = 2000; rows from 2_147_484 on would overflow a plain multiply
        let source = RasterImage::filled(2000, 1, &[10, 20, 30]);
        let result = resize(&source, 1, 2_200_000, AspectRatioPolicy::KeepAspectRatio);

        assert_eq!(result.width(), 1);
        assert_eq!(result.height(), 2_200_000);
        // row 0 only reaches kernel row 0, which sits on the zero edge of the shape
        assert!(result.to_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_same_size_is_a_copy() {
        let mut source = RasterImage::new(3, 3, 3, 1);
        source.set_pixel(1, 2, &[7, 8, 9]);
        let result = resize(&source, 3, 3, AspectRatioPolicy::KeepAspectRatio);
        assert_eq!(result.to_bytes(), source.as_bytes());
    }

    #[test]
    fn test_unsupported_formats_fall_back() {
        for channels in [1u8, 2] {
            let source = RasterImage::filled(8, 8, &vec![99; channels as usize]);
            let result = resize(&source, 2, 2, AspectRatioPolicy::KeepAspectRatio);
            assert_eq!(result.width(), 8);
            assert_eq!(result.channels(), channels);
            assert_eq!(result.to_bytes(), source.as_bytes());
        }

        let wide = RasterImage::new(8, 8, 3, 2);
        let result = resize(&wide, 2, 2, AspectRatioPolicy::KeepAspectRatio);
        assert_eq!(result.width(), 8);
        assert_eq!(result.bytes_per_channel(), 2);
    }

    #[test]
    fn test_output_dimensions_and_format() {
        let source = RasterImage::filled(12, 9, &[1, 2, 3, 4]);
        let result = resize(&source, 4, 3, AspectRatioPolicy::IgnoreAspectRatio);
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 3);
        assert_eq!(result.channels(), 4);
        assert_eq!(result.bytes_per_channel(), 1);
        assert_eq!(result.to_bytes().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_convolve_block_clips_at_edges() {
        // an 8x8 kernel over a 4x4 image only sees its top-left quadrant
        let kernel = Kernel::bicubic(8, BICUBIC_SHARPNESS);
        let source = RasterImage::filled(4, 4, &[200, 200, 200]);
        let sums = convolve_block(&kernel, &source, 0, 0);

        let mut kept = 0.0f32;
        for row in 0..4 {
            for col in 0..4 {
                kept += kernel.weight(col, row);
            }
        }
        assert!(kept < 1.0);
        assert!((sums.values()[0] - 200.0 * kept).abs() < 1e-3);
    }

    #[test]
    fn test_resize_with_matches_resize() {
        let mut source = RasterImage::new(9, 9, 3, 1);
        for y in 0..9 {
            for x in 0..9 {
                source.set_pixel(x, y, &[(x * 20) as u8, (y * 20) as u8, 128]);
            }
        }
        let options = ResizeOptions::new(3, 3);
        let a = resize_with(&source, &options);
        let b = resize(&source, 3, 3, AspectRatioPolicy::KeepAspectRatio);
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_aspect_policy_has_no_effect() {
        let mut source = RasterImage::new(16, 8, 4, 1);
        source.set_pixel(5, 3, &[255, 0, 0, 255]);
        let keep = resize(&source, 4, 2, AspectRatioPolicy::KeepAspectRatio);
        let ignore = resize(&source, 4, 2, AspectRatioPolicy::IgnoreAspectRatio);
        assert_eq!(keep.to_bytes(), ignore.to_bytes());
    }
}
