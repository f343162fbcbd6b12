pub mod config;

pub use config::{AspectSetting, MethodSetting, ResizeConfig, CONFIG_ENV_VAR};
