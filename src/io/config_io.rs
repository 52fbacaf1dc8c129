use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::DeckConfig;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "taskdeck.toml";

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

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<DeckConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the config for a session.
///
/// An explicit path must exist. Otherwise `taskdeck.toml` in `dir` is used
/// when present, and built-in defaults when not.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<DeckConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        read_config(&candidate)
    } else {
        Ok(DeckConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrphanPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.workspace.on_project_delete, OrphanPolicy::Cascade);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_default_file_in_dir_is_read() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            "[workspace]\non_project_delete = \"keep\"\n",
        )
        .unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.workspace.on_project_delete, OrphanPolicy::Keep);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_explicit_file_wins_over_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            "[workspace]\nselect_new_project = false\n",
        )
        .unwrap();
        let explicit = tmp.path().join("other.toml");
        fs::write(&explicit, "[workspace]\nselect_new_project = true\n").unwrap();
        let config = load_config(Some(&explicit), tmp.path()).unwrap();
        assert!(config.workspace.select_new_project);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[workspace\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
