//! Blockscale - fixed-ratio block bicubic image downscaler
//!
//! PNG I/O, configuration and the resize service around the `block-resize`
//! engine. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
