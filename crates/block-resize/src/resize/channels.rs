//! Per-channel unpacking and packing of 8-bit pixels.
//!
//! Channels are addressed by byte offset within the pixel, so channel order
//! (RGB, BGRA, ...) passes through untouched: whatever byte `c` holds in the
//! source is accumulated into sum `c` and written back to byte `c`.

/// Largest supported channel count.
pub const MAX_CHANNELS: usize = 4;

/// Floating-point channel accumulators for one output pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSums {
    sums: [f32; MAX_CHANNELS],
    channels: usize,
}

impl ChannelSums {
    /// Zeroed accumulators for a 3- or 4-channel pixel.
    ///
    /// # Panics
    ///
    /// Panics on any other channel count.
    pub fn new(channels: usize) -> Self {
        assert!(
            matches!(channels, 3 | 4),
            "unsupported number of channels: {channels}"
        );
        Self {
            sums: [0.0; MAX_CHANNELS],
            channels,
        }
    }

    /// Add `pixel * weight` to every channel.
    #[inline]
    pub fn accumulate(&mut self, pixel: &[u8], weight: f32) {
        for (sum, &value) in self.sums[..self.channels].iter_mut().zip(pixel) {
            *sum += value as f32 * weight;
        }
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.sums[..self.channels]
    }

    /// Round every channel and write it into `out`.
    #[inline]
    pub fn pack_into(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.channels);
        for (byte, &sum) in out.iter_mut().zip(self.values()) {
            *byte = round_channel(sum);
        }
    }
}

/// Bytes of pixel `x` in a row of `channels`-byte pixels.
#[inline]
pub fn unpack_pixel(row: &[u8], x: usize, channels: usize) -> &[u8] {
    let start = x * channels;
    &row[start..start + channels]
}

/// Round to nearest and narrow to `u8`.
///
/// # Panics (debug only)
///
/// Debug-asserts the rounded value lies in `[0, 255]`. Release builds
/// saturate, and map NaN to 0.
#[inline]
pub fn round_channel(value: f32) -> u8 {
    let rounded = value.round();
    debug_assert!(
        (0.0..=255.0).contains(&rounded),
        "channel value {value} outside [0, 255]"
    );
    rounded as u8
}
