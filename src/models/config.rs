use block_resize::{AspectRatioPolicy, ResizeMethod};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "BLOCKSCALE_CONFIG";

/// Resize configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Aspect ratio policy passed to the engine
    #[serde(default)]
    pub aspect_ratio: AspectSetting,

    /// Resampling method
    #[serde(default)]
    pub method: MethodSetting,

    /// Largest accepted target width or height
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_dimension() -> u32 {
    16384
}

/// Config-file spelling of [`AspectRatioPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AspectSetting {
    #[default]
    Keep,
    Ignore,
}

impl From<AspectSetting> for AspectRatioPolicy {
    fn from(setting: AspectSetting) -> Self {
        match setting {
            AspectSetting::Keep => AspectRatioPolicy::KeepAspectRatio,
            AspectSetting::Ignore => AspectRatioPolicy::IgnoreAspectRatio,
        }
    }
}

/// Config-file spelling of [`ResizeMethod`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodSetting {
    #[default]
    Bicubic,
}

impl From<MethodSetting> for ResizeMethod {
    fn from(setting: MethodSetting) -> Self {
        match setting {
            MethodSetting::Bicubic => ResizeMethod::Bicubic,
        }
    }
}

impl ResizeConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        aspect_ratio = ?config.aspect_ratio,
                        max_dimension = config.max_dimension,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, else from [`CONFIG_ENV_VAR`], else defaults
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::default(),
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectSetting::default(),
            method: MethodSetting::default(),
            max_dimension: default_max_dimension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ResizeConfig::default();

        assert_eq!(config.aspect_ratio, AspectSetting::Keep);
        assert_eq!(config.method, MethodSetting::Bicubic);
        assert_eq!(config.max_dimension, 16384);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
aspect_ratio: ignore
method: bicubic
max_dimension: 4096
"#;

        let config = ResizeConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.aspect_ratio, AspectSetting::Ignore);
        assert_eq!(config.max_dimension, 4096);
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let config = ResizeConfig::from_yaml("aspect_ratio: ignore\n").unwrap();

        assert_eq!(config.aspect_ratio, AspectSetting::Ignore);
        assert_eq!(config.method, MethodSetting::Bicubic);
        assert_eq!(config.max_dimension, 16384);
    }

    #[test]
    fn test_deserialize_rejects_unknown_method() {
        assert!(ResizeConfig::from_yaml("method: lanczos\n").is_err());
    }

    #[test]
    fn test_aspect_setting_converts_to_policy() {
        assert_eq!(
            AspectRatioPolicy::from(AspectSetting::Keep),
            AspectRatioPolicy::KeepAspectRatio
        );
        assert_eq!(
            AspectRatioPolicy::from(AspectSetting::Ignore),
            AspectRatioPolicy::IgnoreAspectRatio
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_dimension: 1024").unwrap();

        let config = ResizeConfig::load(file.path());
        assert_eq!(config.max_dimension, 1024);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = ResizeConfig::load(Path::new("/nonexistent/blockscale.yaml"));
        assert_eq!(config, ResizeConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_dimension: [not, a, number]").unwrap();

        let config = ResizeConfig::load(file.path());
        assert_eq!(config, ResizeConfig::default());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aspect_ratio: ignore").unwrap();

        let config = ResizeConfig::resolve(Some(file.path()));
        assert_eq!(config.aspect_ratio, AspectSetting::Ignore);
    }
}
