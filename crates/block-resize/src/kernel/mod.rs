//! Normalized separable interpolation kernels.
//!
//! A [`Kernel`] is an `N×N` matrix of `f32` weights produced by evaluating a
//! [`KernelVariant`] shape independently on each axis and multiplying the
//! results. The matrix is then divided by its total, so a weighted sum over a
//! constant block reproduces the constant.
//!
//! # Degenerate kernels
//!
//! With `size == 1` the only sample lands on the left edge of the shape
//! domain, where bicubic, bell, Lanczos and the triangular tent all evaluate
//! to zero. Dividing by a zero sum yields non-finite weights. This is left as
//! is; callers that need a usable kernel pick `size >= 2` and can check
//! [`Kernel::is_degenerate()`].

mod shape;

pub use shape::KernelVariant;

/// Fixed edge length of the triangular kernel.
pub const TRIANGULAR_SIZE: u32 = 4;

/// Default Lanczos window.
pub const DEFAULT_LANCZOS_LOBES: u32 = 2;

/// An immutable, normalized square weight matrix.
///
/// # Example
///
/// ```
/// use block_resize::Kernel;
///
/// let kernel = Kernel::bell_bicubic(6);
/// assert_eq!(kernel.size(), 6);
/// assert!((kernel.sum() - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    variant: KernelVariant,
    size: u32,
    /// Row-major weights, `size * size` entries.
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel of edge length `size` for any variant.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `size >= 1`.
    pub fn new(variant: KernelVariant, size: u32) -> Self {
        debug_assert!(size >= 1, "kernel size must be at least 1");

        let profile: Vec<f32> = (0..size).map(|i| variant.sample(i, size)).collect();

        let mut weights = Vec::with_capacity((size * size) as usize);
        for row in &profile {
            for col in &profile {
                weights.push(row * col);
            }
        }

        let mut kernel = Self {
            variant,
            size,
            weights,
        };
        kernel.normalize();
        kernel
    }

    /// Bicubic kernel with sharpening parameter `a`.
    pub fn bicubic(size: u32, a: f32) -> Self {
        Self::new(KernelVariant::Bicubic { a }, size)
    }

    /// Triangular (tent) kernel, always [`TRIANGULAR_SIZE`] wide.
    pub fn triangular() -> Self {
        Self::new(KernelVariant::Triangular, TRIANGULAR_SIZE)
    }

    /// Bell (quadratic B-spline) kernel.
    pub fn bell_bicubic(size: u32) -> Self {
        Self::new(KernelVariant::BellBicubic, size)
    }

    /// Lanczos kernel with `a` lobes.
    pub fn lanczos(size: u32, a: u32) -> Self {
        Self::new(KernelVariant::Lanczos { a }, size)
    }

    fn normalize(&mut self) {
        let sum: f32 = self.weights.iter().sum();
        for weight in &mut self.weights {
            *weight /= sum;
        }
    }

    /// Edge length of the matrix.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The shape this kernel was built from.
    #[inline]
    pub fn variant(&self) -> KernelVariant {
        self.variant
    }

    /// Weight at column `col`, row `row`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that both indices are below [`size()`](Kernel::size).
    #[inline]
    pub fn weight(&self, col: u32, row: u32) -> f32 {
        debug_assert!(
            col < self.size && row < self.size,
            "kernel index ({col}, {row}) out of bounds for size {}",
            self.size
        );
        self.weights[(row * self.size + col) as usize]
    }

    /// All weights, row-major.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Iterate over rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.weights.chunks_exact(self.size as usize)
    }

    /// Sum of all weights. 1 for any non-degenerate kernel.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// True when normalization produced non-finite weights.
    pub fn is_degenerate(&self) -> bool {
        self.weights.iter().any(|w| !w.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_normalized(kernel: &Kernel) {
        assert!(
            (kernel.sum() - 1.0).abs() < TOLERANCE,
            "{} kernel of size {} sums to {}",
            kernel.variant().name(),
            kernel.size(),
            kernel.sum()
        );
    }

    /// Point symmetry about sample `size / 2`, the centre of the domain.
    fn assert_point_symmetric(kernel: &Kernel) {
        let n = kernel.size();
        for row in 1..n {
            for col in 1..n {
                let mirrored = kernel.weight(n - col, n - row);
                assert!(
                    (kernel.weight(col, row) - mirrored).abs() < TOLERANCE,
                    "{} size {n}: ({col},{row}) != ({},{})",
                    kernel.variant().name(),
                    n - col,
                    n - row
                );
            }
        }
    }

    #[test]
    fn test_all_variants_normalize() {
        for size in 2..=16 {
            assert_normalized(&Kernel::bicubic(size, 0.5));
            assert_normalized(&Kernel::bicubic(size, -0.5));
            assert_normalized(&Kernel::bell_bicubic(size));
            assert_normalized(&Kernel::lanczos(size, DEFAULT_LANCZOS_LOBES));
            assert_normalized(&Kernel::lanczos(size, 3));
            assert_normalized(&Kernel::new(KernelVariant::Triangular, size));
        }
        assert_normalized(&Kernel::triangular());
    }

    #[test]
    fn test_symmetry() {
        for size in 2..=12 {
            assert_point_symmetric(&Kernel::bicubic(size, 0.5));
            assert_point_symmetric(&Kernel::bell_bicubic(size));
            assert_point_symmetric(&Kernel::new(KernelVariant::Triangular, size));
        }
        assert_point_symmetric(&Kernel::triangular());
    }

    #[test]
    fn test_edge_row_and_column_are_zero() {
        // index 0 sits on the domain edge where these shapes vanish
        for kernel in [
            Kernel::bicubic(8, 0.5),
            Kernel::bell_bicubic(8),
            Kernel::triangular(),
        ] {
            for i in 0..kernel.size() {
                assert_eq!(kernel.weight(0, i), 0.0);
                assert_eq!(kernel.weight(i, 0), 0.0);
            }
        }
    }

    #[test]
    fn test_bicubic_size_four_is_a_point_sample() {
        let kernel = Kernel::bicubic(4, 0.5);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if (col, row) == (2, 2) { 1.0 } else { 0.0 };
                assert!((kernel.weight(col, row) - expected).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_triangular_weights() {
        // profile [0, 0.5, 1, 0.5], 1-D sum 2, 2-D sum 4
        let kernel = Kernel::triangular();
        assert_eq!(kernel.size(), TRIANGULAR_SIZE);
        assert!((kernel.weight(2, 2) - 0.25).abs() < TOLERANCE);
        assert!((kernel.weight(1, 2) - 0.125).abs() < TOLERANCE);
        assert!((kernel.weight(3, 3) - 0.0625).abs() < TOLERANCE);
    }

    #[test]
    fn test_separable_product() {
        let kernel = Kernel::lanczos(7, 2);
        let n = kernel.size();
        // w(c,r) * w(r',c') == w(c,c') * w(r',r) for a rank-1 matrix
        for r in 0..n {
            for c in 0..n {
                let lhs = kernel.weight(c, r) * kernel.weight(r, c);
                let rhs = kernel.weight(c, c) * kernel.weight(r, r);
                assert!((lhs - rhs).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_size_one_is_degenerate() {
        assert!(Kernel::bicubic(1, 0.5).is_degenerate());
        assert!(Kernel::bell_bicubic(1).is_degenerate());
        assert!(Kernel::lanczos(1, 2).is_degenerate());
        assert!(Kernel::new(KernelVariant::Triangular, 1).is_degenerate());
        assert!(!Kernel::bicubic(2, 0.5).is_degenerate());
    }

    #[test]
    fn test_rows_iterator() {
        let kernel = Kernel::bell_bicubic(5);
        let rows: Vec<&[f32]> = kernel.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[2][3], kernel.weight(3, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    #[cfg(debug_assertions)]
    fn test_weight_out_of_bounds_panics() {
        let kernel = Kernel::triangular();
        let _ = kernel.weight(4, 0);
    }
}
