//! One-dimensional kernel shape functions.
//!
//! Every shape is defined over a symmetric domain `[-h, +h]`. A sample index
//! `i` in `0..size` is mapped uniformly into that domain with
//! `x = (i / size - 0.5) * 2 * h`, so index 0 always lands on the left edge
//! and the last index stops one step short of the right edge.

use std::f32::consts::PI;

/// Below this magnitude the Lanczos shape is treated as its limit value 1.
const LANCZOS_CENTER_EPSILON: f32 = 1e-4;

/// The interpolation kernel family.
///
/// Each variant carries its shape parameters; the 2-D weight at `(i, k)` is
/// the product of two independent 1-D evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelVariant {
    /// Piecewise cubic on `[-2, 2]` with sharpening parameter `a`.
    Bicubic {
        /// Sharpening parameter.
        a: f32,
    },
    /// Tent function on `[-1, 1]`.
    Triangular,
    /// Quadratic B-spline ("bell") on `[-1.5, 1.5]`.
    BellBicubic,
    /// Windowed sinc on `[-a, a]`.
    Lanczos {
        /// Window lobes.
        a: u32,
    },
}

impl KernelVariant {
    /// Half-width `h` of the shape's symmetric domain.
    pub fn half_width(&self) -> f32 {
        match *self {
            KernelVariant::Bicubic { .. } => 2.0,
            KernelVariant::Triangular => 1.0,
            KernelVariant::BellBicubic => 1.5,
            KernelVariant::Lanczos { a } => a as f32,
        }
    }

    /// Position in the shape domain of sample `index` out of `size`.
    #[inline]
    pub fn sample_position(&self, index: u32, size: u32) -> f32 {
        (index as f32 / size as f32 - 0.5) * 2.0 * self.half_width()
    }

    /// Evaluate the raw (unnormalized) shape at domain position `x`.
    pub fn evaluate(&self, x: f32) -> f32 {
        match *self {
            KernelVariant::Bicubic { a } => bicubic(x, a),
            KernelVariant::Triangular => triangular(x),
            KernelVariant::BellBicubic => bell(x),
            KernelVariant::Lanczos { a } => lanczos(x, a),
        }
    }

    /// Evaluate the shape at sample `index` out of `size`.
    #[inline]
    pub fn sample(&self, index: u32, size: u32) -> f32 {
        self.evaluate(self.sample_position(index, size))
    }

    /// Short lowercase name, used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            KernelVariant::Bicubic { .. } => "bicubic",
            KernelVariant::Triangular => "triangular",
            KernelVariant::BellBicubic => "bell",
            KernelVariant::Lanczos { .. } => "lanczos",
        }
    }
}

/// Piecewise cubic convolution shape.
///
/// ```text
/// |x| <= 1      (a+2)|x|^3 - (a+3)x^2 + 1
/// 1 < |x| < 2   a|x|^3 - 5a x^2 + 8a|x| - 4a
/// otherwise     0
/// ```
#[inline]
pub fn bicubic(x: f32, a: f32) -> f32 {
    let x = x.abs();
    if x <= 1.0 {
        (a + 2.0) * x * x * x - (a + 3.0) * x * x + 1.0
    } else if x < 2.0 {
        a * x * x * x - 5.0 * a * x * x + 8.0 * a * x - 4.0 * a
    } else {
        0.0
    }
}

/// Tent shape. Not clipped: callers stay inside `[-1, 1]`.
#[inline]
pub fn triangular(x: f32) -> f32 {
    if x <= 0.0 {
        x + 1.0
    } else {
        1.0 - x
    }
}

/// Quadratic B-spline bell.
#[inline]
pub fn bell(x: f32) -> f32 {
    if (-1.5..-0.5).contains(&x) {
        0.5 * (x + 1.5) * (x + 1.5)
    } else if (-0.5..=0.5).contains(&x) {
        0.75 - x * x
    } else if x > 0.5 && x <= 1.5 {
        0.5 * (x - 1.5) * (x - 1.5)
    } else {
        0.0
    }
}

/// Lanczos window: `sinc(x) * sinc(x / a)` with normalized sinc.
#[inline]
pub fn lanczos(x: f32, a: u32) -> f32 {
    let a = a as f32;
    let magnitude = x.abs();
    if magnitude < LANCZOS_CENTER_EPSILON {
        1.0
    } else if magnitude < a {
        a * (PI * x).sin() * (PI * x / a).sin() / (PI * PI * x * x)
    } else {
        0.0
    }
}
