//! # Hexseq AppConfig
//!
//! The optional `hexseq.toml`. Every section may be omitted.

use std::fs;
use std::path::{Path, PathBuf};

use hexseq_logger_config::Config as LogConfig;
use serde::{Deserialize, Serialize};

use super::ExitCode;

/// The file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hexseq.toml";
/// Byte length used by `hexseq random` without an explicit length.
pub const DEFAULT_RANDOM_LENGTH: usize = 32;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logger: LogConfig,
    pub random: RandomConfig,
    /// Where the config was read from, `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub default_length: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            default_length: DEFAULT_RANDOM_LENGTH,
        }
    }
}

impl AppConfig {
    /// Loads the config.
    ///
    /// An explicit path must exist. Without one, `hexseq.toml` in `root_dir` is used when present,
    /// otherwise the defaults.
    pub fn load(root_dir: &Path, explicit: Option<&Path>) -> Result<AppConfig, ExitCode> {
        let path = match explicit {
            Some(path) => root_dir.join(path),
            None => {
                let path = root_dir.join(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    return Ok(AppConfig::default());
                }
                path
            }
        };
        let content = fs::read_to_string(&path).map_err(|err| {
            eprintln!("Config Error: cannot read {}: {err}", path.display());
            ExitCode::Config
        })?;
        let mut config = AppConfig::parse(&content)?;
        config.source = Some(path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<AppConfig, ExitCode> {
        Ok(toml::from_str(content)?)
    }

    pub fn logger(&self) -> &LogConfig {
        &self.logger
    }

    /// Settings that load fine but are probably a mistake.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.random.default_length == 0 {
            warnings.push(
                "random.default_length is 0, `hexseq random` without LEN prints 0x".to_owned(),
            );
        }
        if self.logger.filter.as_deref().is_some_and(str::is_empty) {
            warnings.push("logger.filter is empty, falling back to the default".to_owned());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mkdir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("app_config_test")
            .tempdir()
            .unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = mkdir();
        let config = AppConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.random.default_length, DEFAULT_RANDOM_LENGTH);
        assert!(config.source.is_none());
    }

    #[test]
    fn test_default_file_in_root_dir() {
        let dir = mkdir();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "[logger]\nfilter = \"debug\"\n\n[random]\ndefault_length = 8\n",
        )
        .unwrap();
        let config = AppConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.logger.filter.as_deref(), Some("debug"));
        assert_eq!(config.random.default_length, 8);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_explicit_file() {
        let dir = mkdir();
        fs::write(dir.path().join("custom.toml"), "[random]\ndefault_length = 4\n").unwrap();
        let config = AppConfig::load(dir.path(), Some(Path::new("custom.toml"))).unwrap();
        assert_eq!(config.random.default_length, 4);
        assert_eq!(config.logger, LogConfig::default());
    }

    #[test]
    fn test_warnings() {
        assert!(AppConfig::default().warnings().is_empty());
        let config = AppConfig::parse("[logger]\nfilter = \"\"\n[random]\ndefault_length = 0\n")
            .unwrap();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("random.default_length is 0"));
        assert!(warnings[1].starts_with("logger.filter is empty"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = mkdir();
        let ret = AppConfig::load(dir.path(), Some(Path::new("absent.toml")));
        assert_eq!(ret, Err(ExitCode::Config));
    }

    #[test]
    fn test_malformed_file() {
        assert_eq!(
            AppConfig::parse("[random]\ndefault_length = \"many\"\n"),
            Err(ExitCode::Config)
        );
    }
}
