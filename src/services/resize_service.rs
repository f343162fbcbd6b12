use crate::error::ResizeError;
use crate::models::{AspectSetting, ResizeConfig};
use crate::services::png_io::{decode_png, encode_png};
use block_resize::{
    downscale_ratio, is_supported_format, resize_with, PixelBuffer, RasterImage, ResizeOptions,
    Size,
};
use std::path::Path;
use std::time::Instant;

/// Validates resize requests against the configuration and runs the engine
pub struct ResizeService {
    config: ResizeConfig,
}

impl ResizeService {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Build engine options, with `aspect` overriding the configured policy
    pub fn options(&self, width: u32, height: u32, aspect: Option<AspectSetting>) -> ResizeOptions {
        ResizeOptions::new(width, height)
            .method(self.config.method.into())
            .aspect_ratio(aspect.unwrap_or(self.config.aspect_ratio).into())
    }

    /// Resize an in-memory image.
    ///
    /// Requests the engine would answer with a copy (same size, unsupported
    /// format) are passed through. Anything else must be at least a 2:1
    /// reduction in width: smaller ratios produce a degenerate kernel.
    pub fn resize_image(
        &self,
        image: &dyn PixelBuffer,
        width: u32,
        height: u32,
        aspect: Option<AspectSetting>,
    ) -> Result<Box<dyn PixelBuffer>, ResizeError> {
        let max = self.config.max_dimension;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(ResizeError::UnsupportedDimensions { width, height });
        }

        let options = self.options(width, height, aspect);
        let source = Size::new(image.width(), image.height());
        let target = Size::new(width, height);

        if source == target || !is_supported_format(image) {
            tracing::debug!(
                source = %source,
                target = %target,
                channels = image.channels(),
                bytes_per_channel = image.bytes_per_channel(),
                "Resize fast path, returning copy"
            );
            return Ok(resize_with(image, &options));
        }

        if image.width() / width < 2 {
            return Err(ResizeError::UnsupportedScale {
                from_width: image.width(),
                to_width: width,
            });
        }

        let started = Instant::now();
        let result = resize_with(image, &options);
        tracing::info!(
            source = %source,
            target = %target,
            kernel_size = downscale_ratio(image.width(), width),
            channels = image.channels(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Resized image"
        );

        Ok(result)
    }

    /// Decode PNG bytes, resize, and encode the result as PNG
    pub fn resize_png(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        aspect: Option<AspectSetting>,
    ) -> Result<Vec<u8>, ResizeError> {
        let image: RasterImage = decode_png(data)?;
        let resized = self.resize_image(&image, width, height, aspect)?;
        encode_png(resized.as_ref())
    }

    /// Resize a PNG file on disk. Returns the size actually written.
    pub fn resize_file(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
        aspect: Option<AspectSetting>,
    ) -> Result<Size, ResizeError> {
        let data = std::fs::read(input)?;
        let image = decode_png(&data)?;
        let resized = self.resize_image(&image, width, height, aspect)?;
        let written = Size::new(resized.width(), resized.height());

        std::fs::write(output, encode_png(resized.as_ref())?)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            size = %written,
            "Wrote resized PNG"
        );

        Ok(written)
    }
}

impl Default for ResizeService {
    fn default() -> Self {
        Self::new(ResizeConfig::default())
    }
}
