pub mod kernel_report;
pub mod png_io;
pub mod resize_service;

pub use kernel_report::{KernelChoice, KernelReport};
pub use png_io::{decode_png, encode_png};
pub use resize_service::ResizeService;
