//! CLI configuration
//!
//! Settings come from an optional TOML file. The database path is resolved
//! from, in order: `--db`, `SNIPPET_ARSENAL_DB`, `db_path` in the file, and
//! finally `snippets.db` in the working directory.

use arsenal_core::errors::{ExError, ExErrorKind};
use arsenal_core::model::{Status, DEFAULT_LANGUAGE};
use arsenal_store::DEFAULT_SEARCH_LIMIT;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the database path
pub const DB_ENV_VAR: &str = "SNIPPET_ARSENAL_DB";

/// Database file used when nothing else is configured
pub const DEFAULT_DB_FILE: &str = "snippets.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    /// Language preset for `add`
    pub default_language: String,
    /// Status preset for `add`
    pub default_status: Status,
    /// Maximum rows printed by `search`
    pub search_limit: usize,
    pub log_format: LogFormat,
    /// Level for `arsenal` targets when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
            default_status: Status::Draft,
            search_limit: DEFAULT_SEARCH_LIMIT,
            log_format: LogFormat::Pretty,
            log_level: "off".to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ExError> {
        toml::from_str(source).map_err(|e| {
            ExError::new(ExErrorKind::Config)
                .with_op("parse_config")
                .with_message(e.to_string())
        })
    }

    /// Filter directive handed to the logging facility
    pub fn log_filter(&self) -> String {
        format!("arsenal={}", self.log_level)
    }
}

/// `<config dir>/snippet-arsenal/config.toml`, when the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snippet-arsenal").join("config.toml"))
}

/// Load configuration
///
/// An explicit path must exist. The default path is optional; when it is
/// absent the built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<Config, ExError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Config::default()),
        },
    };

    let source = std::fs::read_to_string(&path).map_err(|e| {
        ExError::new(ExErrorKind::Config)
            .with_op("read_config")
            .with_message(format!("{}: {}", path.display(), e))
    })?;
    Config::from_toml(&source)
}

/// Pick the database path by precedence: flag, environment, config, default
pub fn resolve_db_path(flag: Option<PathBuf>, env: Option<OsString>, config: &Config) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.db_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_language, "py");
        assert_eq!(config.search_limit, 200);
    }

    #[test]
    fn test_full_file_parses() {
        let config = Config::from_toml(
            r#"
            db_path = "/tmp/arsenal.db"
            default_language = "rust"
            default_status = "tested"
            search_limit = 25
            log_format = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/arsenal.db")));
        assert_eq!(config.default_language, "rust");
        assert_eq!(config.default_status, Status::Tested);
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter(), "arsenal=debug");
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = Config::from_toml("colour = true").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }

    #[test]
    fn test_db_path_precedence() {
        let mut config = Config::default();
        assert_eq!(
            resolve_db_path(None, None, &config),
            PathBuf::from(DEFAULT_DB_FILE)
        );

        config.db_path = Some(PathBuf::from("from-config.db"));
        assert_eq!(
            resolve_db_path(None, None, &config),
            PathBuf::from("from-config.db")
        );
        assert_eq!(
            resolve_db_path(None, Some(OsString::from("from-env.db")), &config),
            PathBuf::from("from-env.db")
        );
        assert_eq!(
            resolve_db_path(
                Some(PathBuf::from("from-flag.db")),
                Some(OsString::from("from-env.db")),
                &config
            ),
            PathBuf::from("from-flag.db")
        );
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let config = Config::default();
        assert_eq!(
            resolve_db_path(None, Some(OsString::new()), &config),
            PathBuf::from(DEFAULT_DB_FILE)
        );
    }
}
