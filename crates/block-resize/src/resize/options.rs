//! Resize configuration surface.

/// Resampling method. Only fixed-ratio block bicubic is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMethod {
    #[default]
    Bicubic,
}

/// Aspect ratio handling.
///
/// Accepted by [`resize()`](super::resize) but not yet applied: the output
/// always has exactly the requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatioPolicy {
    #[default]
    KeepAspectRatio,
    IgnoreAspectRatio,
}

/// Target size plus method and aspect policy.
///
/// # Example
///
/// ```
/// use block_resize::{AspectRatioPolicy, ResizeOptions};
///
/// let options = ResizeOptions::new(200, 100)
///     .aspect_ratio(AspectRatioPolicy::IgnoreAspectRatio);
/// assert_eq!(options.width, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Destination width in pixels.
    pub width: u32,
    /// Destination height in pixels.
    pub height: u32,
    pub method: ResizeMethod,
    pub aspect_ratio: AspectRatioPolicy,
}

impl ResizeOptions {
    /// Options for a `width × height` destination with default method and policy.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            method: ResizeMethod::default(),
            aspect_ratio: AspectRatioPolicy::default(),
        }
    }

    pub fn method(mut self, method: ResizeMethod) -> Self {
        self.method = method;
        self
    }

    pub fn aspect_ratio(mut self, policy: AspectRatioPolicy) -> Self {
        self.aspect_ratio = policy;
        self
    }
}
