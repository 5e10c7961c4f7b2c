//! TOML configuration for the ganzhi engine.
//!
//! ```toml
//! [peach]
//! start_age = 18
//! end_age = 58
//! threshold = 35
//! ```
//!
//! Missing keys (or a missing file, when the caller chooses to skip
//! [`load`]) leave the defaults in place. Values are validated after
//! merging, so a file that only sets `start_age = 70` is rejected because
//! it would exceed the default `end_age`.

pub mod schema;

pub use schema::{ConfigFile, PeachSection};

use std::fs;
use std::path::{Path, PathBuf};

use ganzhi_base::{GanzhiError, PeachScanConfig};
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(#[from] GanzhiError),
}

/// Resolved engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub peach: PeachScanConfig,
}

impl EngineConfig {
    /// Apply a parsed file on top of the defaults and validate.
    pub fn from_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = PeachScanConfig::default();
        let peach = PeachScanConfig {
            start_age: file.peach.start_age.unwrap_or(defaults.start_age),
            end_age: file.peach.end_age.unwrap_or(defaults.end_age),
            threshold: file.peach.threshold.unwrap_or(defaults.threshold),
        };
        peach.validate()?;
        Ok(Self { peach })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.peach.validate().map_err(ConfigError::from)
    }
}

/// Parse TOML text into a validated config.
pub fn from_toml_str(text: &str) -> Result<EngineConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(text)?;
    EngineConfig::from_file(&file)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_toml_str(&text)?;
    tracing::info!(
        path = %path.display(),
        start_age = config.peach.start_age,
        end_age = config.peach.end_age,
        threshold = config.peach.threshold,
        "loaded config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let config = from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.peach.start_age, 18);
        assert_eq!(config.peach.end_age, 58);
        assert_eq!(config.peach.threshold, 35);
    }

    #[test]
    fn partial_section_merges_with_defaults() {
        let config = from_toml_str("[peach]\nthreshold = 50\n").unwrap();
        assert_eq!(config.peach.threshold, 50);
        assert_eq!(config.peach.start_age, 18);
    }

    #[test]
    fn full_section() {
        let text = "[peach]\nstart_age = 20\nend_age = 40\nthreshold = 10\n";
        let config = from_toml_str(text).unwrap();
        assert_eq!(
            config.peach,
            PeachScanConfig {
                start_age: 20,
                end_age: 40,
                threshold: 10
            }
        );
    }

    #[test]
    fn inverted_range_rejected() {
        let err = from_toml_str("[peach]\nstart_age = 70\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unreachable_threshold_rejected() {
        let err = from_toml_str("[peach]\nthreshold = 99\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = from_toml_str("[peach]\nstart = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_age_is_parse_error() {
        let err = from_toml_str("[peach]\nstart_age = -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/ganzhi.toml")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/ganzhi.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "ganzhi_config_test_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[peach]\nend_age = 45\n").unwrap();
        let config = load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.peach.end_age, 45);
    }
}
