//! User settings for the terminal calculator.
//!
//! Settings come from an optional TOML file; every field has a default, so
//! an empty file (or no file at all) is valid.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "calc.log"
//! history_newest_first = true
//! show_history = false
//! prompt = "> "
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or has unknown or mistyped keys.
    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// File that log records are appended to, if any.
    pub log_file: Option<PathBuf>,

    /// List the most recent equation first in the history panel.
    pub history_newest_first: bool,

    /// Open the history panel at startup.
    pub show_history: bool,

    /// Prompt printed before each line of interactive input.
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            history_newest_first: true,
            show_history: false,
            prompt: "> ".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn defaults_keep_terminal_quiet() {
        let settings = Settings::default();

        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_file, None);
        assert!(settings.history_newest_first);
        assert!(!settings.show_history);
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let settings = Settings::from_toml_str(
            r#"
            log_level = "debug"
            show_history = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert!(settings.show_history);
        assert_eq!(settings.prompt, "> ");
    }

    #[test]
    fn log_file_is_read_as_path() {
        let settings = Settings::from_toml_str(r#"log_file = "logs/calc.log""#).unwrap();

        assert_eq!(settings.log_file, Some(PathBuf::from("logs/calc.log")));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Settings::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Settings::from_toml_str("show_history = \"yes\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Settings::load(Path::new("/definitely/not/here/calc.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
