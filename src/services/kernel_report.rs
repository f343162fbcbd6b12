use crate::error::ResizeError;
use block_resize::{Kernel, BICUBIC_SHARPNESS, DEFAULT_LANCZOS_LOBES};
use serde::Serialize;
use std::fmt::Write;

/// Kernel family selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KernelChoice {
    Bicubic,
    Triangular,
    Bell,
    Lanczos,
}

impl KernelChoice {
    /// Build a kernel.
    ///
    /// `param` is the bicubic sharpening value or the Lanczos lobe count; it
    /// is ignored by the other shapes. Triangular kernels are always 4 wide.
    pub fn build(self, size: u32, param: Option<f32>) -> Result<Kernel, ResizeError> {
        if size == 0 {
            return Err(ResizeError::InvalidKernelSize(size));
        }
        let kernel = match self {
            KernelChoice::Bicubic => Kernel::bicubic(size, param.unwrap_or(BICUBIC_SHARPNESS)),
            KernelChoice::Triangular => Kernel::triangular(),
            KernelChoice::Bell => Kernel::bell_bicubic(size),
            KernelChoice::Lanczos => {
                let lobes = param
                    .map(|a| a.round().max(1.0) as u32)
                    .unwrap_or(DEFAULT_LANCZOS_LOBES);
                Kernel::lanczos(size, lobes)
            }
        };
        if kernel.is_degenerate() {
            tracing::warn!(
                variant = kernel.variant().name(),
                size,
                "Kernel sums to zero before normalization, weights are not finite"
            );
        }
        Ok(kernel)
    }
}

/// Printable summary of a kernel matrix
#[derive(Debug, Serialize)]
pub struct KernelReport {
    pub variant: &'static str,
    pub size: u32,
    pub sum: f32,
    pub degenerate: bool,
    pub rows: Vec<Vec<f32>>,
}

impl KernelReport {
    pub fn from_kernel(kernel: &Kernel) -> Self {
        Self {
            variant: kernel.variant().name(),
            size: kernel.size(),
            sum: kernel.sum(),
            degenerate: kernel.is_degenerate(),
            rows: kernel.rows().map(|row| row.to_vec()).collect(),
        }
    }

    /// One matrix row per line, followed by the sum
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} kernel, {}x{}", self.variant, self.size, self.size);
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|w| format!("{w:>9.6}")).collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        let _ = writeln!(out, "sum = {:.6}", self.sum);
        out
    }
}
