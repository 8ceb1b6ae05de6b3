//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output directories are not read here; they come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` overrides.

use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ASSET_CACHE_MAX_AGE: u64 = 3600;

/// Configuration errors, reported before the server binds
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidInteger { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is not set
    /// Example: info, fluent_landing=debug,tower_http=debug
    pub log_level: String,

    /// Brotli/Gzip response compression
    pub compression: bool,

    /// `Cache-Control: max-age` for `/pkg` assets, `0` disables the header
    pub asset_cache_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let compression = match lookup("ENABLE_COMPRESSION") {
            Some(value) => parse_bool("ENABLE_COMPRESSION", &value)?,
            None => true,
        };

        let asset_cache_max_age = match lookup("ASSET_CACHE_MAX_AGE") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidInteger {
                    name: "ASSET_CACHE_MAX_AGE",
                    value,
                })?,
            None => DEFAULT_ASSET_CACHE_MAX_AGE,
        };

        Ok(Self {
            log_level,
            compression,
            asset_cache_max_age,
        })
    }

    /// `Cache-Control` header value for static assets, if caching is enabled
    pub fn asset_cache_control(&self) -> Option<String> {
        (self.asset_cache_max_age > 0).then(|| format!("public, max-age={}", self.asset_cache_max_age))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            compression: true,
            asset_cache_max_age: DEFAULT_ASSET_CACHE_MAX_AGE,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert!(config.compression);
        assert_eq!(config.asset_cache_max_age, 3600);
    }

    #[test]
    fn test_all_fields() {
        let config = load(&[
            ("LOG_LEVEL", "fluent_landing=debug,tower_http=debug"),
            ("ENABLE_COMPRESSION", "off"),
            ("ASSET_CACHE_MAX_AGE", "86400"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "fluent_landing=debug,tower_http=debug");
        assert!(!config.compression);
        assert_eq!(config.asset_cache_max_age, 86400);
    }

    #[test]
    fn test_blank_log_level_falls_back() {
        let config = load(&[("LOG_LEVEL", "   ")]).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bool_forms() {
        for value in ["1", "true", "TRUE", "yes", "On", " true "] {
            assert_eq!(parse_bool("X", value), Ok(true), "{value:?}");
        }
        for value in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool("X", value), Ok(false), "{value:?}");
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[("ENABLE_COMPRESSION", "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "ENABLE_COMPRESSION",
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().contains("ENABLE_COMPRESSION"));
    }

    #[test]
    fn test_invalid_integer() {
        let err = load(&[("ASSET_CACHE_MAX_AGE", "-5")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInteger {
                name: "ASSET_CACHE_MAX_AGE",
                ..
            }
        ));
    }

    #[test]
    fn test_asset_cache_control() {
        let config = Config::default();
        assert_eq!(
            config.asset_cache_control().as_deref(),
            Some("public, max-age=3600")
        );

        let disabled = Config {
            asset_cache_max_age: 0,
            ..Config::default()
        };
        assert!(disabled.asset_cache_control().is_none());
    }
}
