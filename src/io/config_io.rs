use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::DashboardConfig;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("dayboard").join("config.toml")
}

/// Get the directory log files are written to, respecting XDG_STATE_HOME
pub fn state_dir() -> PathBuf {
    let state_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("state"));
    state_dir.join("dayboard")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read a config file. A missing file yields the defaults.
pub fn read_config_from(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DashboardConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config from an explicit path if given, else from the default location.
///
/// An explicit path must exist; the default location may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            read_config_from(path)
        }
        None => read_config_from(&default_config_path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[board]
seed_sample_data = false
default_duration = 45

[infra]
refresh_delay_ms = 250

[log]
level = "debug"

[ui]
show_key_hints = false

[ui.colors]
background = "#000000"

[ui.category_colors]
work = "#112233"
"##
    }

    #[test]
    fn test_read_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config_from(&path).unwrap();
        assert!(!config.board.seed_sample_data);
        assert_eq!(config.board.default_duration, 45);
        assert_eq!(config.infra.refresh_delay_ms, 250);
        assert_eq!(config.log.level, "debug");
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").map(String::as_str), Some("#000000"));
        assert_eq!(config.ui.category_colors.get("work").map(String::as_str), Some("#112233"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("nope.toml")).unwrap();
        assert!(config.board.seed_sample_data);
        assert_eq!(config.board.default_duration, 60);
        assert_eq!(config.infra.refresh_delay_ms, 1500);
        assert_eq!(config.log.level, "info");
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[infra]\nrefresh_delay_ms = 10\n").unwrap();
        let config = read_config_from(&path).unwrap();
        assert_eq!(config.infra.refresh_delay_ms, 10);
        assert!(config.board.seed_sample_data);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[board\nseed_sample_data = ").unwrap();
        let err = read_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
