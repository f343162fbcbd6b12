//! PNG decoding into, and encoding out of, the engine's pixel buffers.

use crate::error::ResizeError;
use block_resize::{PixelBuffer, RasterImage};
use std::io::Cursor;

/// Decode a PNG into a [`RasterImage`].
///
/// Palette and sub-byte grayscale images are expanded to 8 bits per channel.
/// Grayscale, grayscale-alpha and 16-bit images keep their layout, which the
/// engine then passes through unchanged.
pub fn decode_png(data: &[u8]) -> Result<RasterImage, ResizeError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ResizeError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ResizeError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let channels = info.color_type.samples() as u8;
    let bytes_per_channel = match info.bit_depth {
        png::BitDepth::Sixteen => 2,
        _ => 1,
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        channels,
        bytes_per_channel,
        "Decoded PNG"
    );

    Ok(RasterImage::from_bytes(
        buf,
        info.width,
        info.height,
        channels,
        bytes_per_channel,
    )?)
}

/// Encode any [`PixelBuffer`] as a PNG with the matching colour type.
pub fn encode_png(buffer: &dyn PixelBuffer) -> Result<Vec<u8>, ResizeError> {
    let color_type = match buffer.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(ResizeError::Encode(format!("no PNG colour type for {n} channels"))),
    };
    let bit_depth = match buffer.bytes_per_channel() {
        1 => png::BitDepth::Eight,
        2 => png::BitDepth::Sixteen,
        n => return Err(ResizeError::Encode(format!("no PNG bit depth for {n} bytes per channel"))),
    };

    let mut out = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ResizeError::Encode(e.to_string()))?;
        writer
            .write_image_data(&buffer.to_bytes())
            .map_err(|e| ResizeError::Encode(e.to_string()))?;
    }
    Ok(out.into_inner())
}
