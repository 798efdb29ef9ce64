//! Runtime configuration.
//!
//! Native builds read the process environment, then `.env`, then the config
//! file bundled into the binary; earlier sources win. The browser has no
//! process environment, so web builds read the bundled file directly.

use once_cell::sync::Lazy;
use reqwest::Url;
use std::env;
use thiserror::Error;
use tracing::Level;

/// Bundled config for web and mobile builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_BASE_VAR: &str = "SPARS_API_BASE";
pub const LOG_LEVEL_VAR: &str = "SPARS_LOG";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var} has unknown log level {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: Url,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(API_BASE_VAR).ok().as_deref(),
            env::var(LOG_LEVEL_VAR).ok().as_deref(),
        )
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = parse_api_base(api_base.unwrap_or(DEFAULT_API_BASE))?;
        let log_level = match log_level {
            Some(raw) => parse_log_level(raw)?,
            None => Level::INFO,
        };
        Ok(Self { api_base, log_level })
    }

    /// Config from `KEY=VALUE` text alone, without consulting `std::env`.
    pub fn from_env_text(source: &str) -> Result<Self, ConfigError> {
        let lookup = |wanted: &str| {
            parse_env_lines(source)
                .filter(|(key, _)| *key == wanted)
                .map(|(_, value)| value)
                .last()
        };
        Self::from_values(lookup(API_BASE_VAR), lookup(LOG_LEVEL_VAR))
    }

    /// Config baked into the binary from `assets/config.env`.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_env_text(BUNDLED_CONFIG)
    }
}

static CONFIG: Lazy<Result<AppConfig, ConfigError>> = Lazy::new(resolve_config);

#[cfg(not(target_arch = "wasm32"))]
fn resolve_config() -> Result<AppConfig, ConfigError> {
    load_dotenv();
    AppConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
fn resolve_config() -> Result<AppConfig, ConfigError> {
    AppConfig::bundled()
}

/// Process-wide configuration, resolved once on first use.
pub fn app_config() -> Result<&'static AppConfig, &'static ConfigError> {
    Lazy::force(&CONFIG).as_ref()
}

pub fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl {
        var: API_BASE_VAR,
        value: trimmed.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var: API_BASE_VAR,
            scheme: other.to_string(),
        }),
    }
}

pub fn parse_log_level(raw: &str) -> Result<Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel {
            var: LOG_LEVEL_VAR,
            value: raw.to_string(),
        }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // .env for desktop dev
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(not(target_arch = "wasm32"))]
fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: called from the config initializer before the UI spawns any threads
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        line.split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, _)| !key.is_empty())
    })
}
