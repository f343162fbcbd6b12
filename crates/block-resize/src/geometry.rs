//! Integer size arithmetic.
//!
//! These helpers compute aspect-preserving target sizes. The resize engine
//! itself always honours the exact requested dimensions.

use std::fmt;
use std::ops::Mul;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Uniformly scale so the result fits inside `target`.
    ///
    /// ```
    /// use block_resize::Size;
    ///
    /// let fitted = Size::new(200, 100).scaled_to_fit(Size::new(50, 50));
    /// assert_eq!(fitted, Size::new(50, 25));
    /// ```
    pub fn scaled_to_fit(self, target: Size) -> Size {
        let factor = (target.width as f32 / self.width as f32)
            .min(target.height as f32 / self.height as f32);
        self * factor
    }

    /// Uniformly scale by a ratio picked from the per-axis ratios.
    ///
    /// The per-axis ratios are `self / target`. When both exceed 1 the larger
    /// one is used, otherwise the smaller one; the result is `self / ratio`.
    /// This covers `target` only when at least one axis grows: if both
    /// shrink, the result fits inside `target` instead.
    pub fn scaled_to_cover(self, target: Size) -> Size {
        let x_ratio = self.width as f32 / target.width as f32;
        let y_ratio = self.height as f32 / target.height as f32;

        let ratio = if x_ratio > 1.0 && y_ratio > 1.0 {
            x_ratio.max(y_ratio)
        } else {
            x_ratio.min(y_ratio)
        };

        self * (1.0 / ratio)
    }

    /// Number of pixels.
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Round half away from zero, then narrow to `u32` (saturating).
#[inline]
pub fn round_to_u32(value: f32) -> u32 {
    value.round() as u32
}

/// Scale both axes by `factor`, rounding each to nearest.
impl Mul<f32> for Size {
    type Output = Size;

    fn mul(self, factor: f32) -> Size {
        Size {
            width: round_to_u32(self.width as f32 * factor),
            height: round_to_u32(self.height as f32 * factor),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
