//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `SESSION_COOKIE_NAME`: Name of the session cookie (default: `linkline_session`)
//! - `SESSION_TTL_SECONDS`: Idle lifetime of a session (default: `86400`)
//! - `SESSION_CAPACITY`: Maximum number of live sessions (default: `10000`)
//! - `SESSION_COOKIE_SECURE`: Add the `Secure` attribute to the cookie (default: `false`)
//!
//! Empty or whitespace-only values are treated as unset.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::server::ServerConfig;

pub const DEFAULT_COOKIE_NAME: &str = "linkline_session";
pub const DEFAULT_TTL_SECONDS: u64 = 86_400;
pub const DEFAULT_CAPACITY: usize = 10_000;

// =============================================================================
// ConfigError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// SessionConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub time_to_live: Duration,
    pub capacity: usize,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            time_to_live: Duration::from_secs(DEFAULT_TTL_SECONDS),
            capacity: DEFAULT_CAPACITY,
            secure_cookie: false,
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let host = read("HOST").unwrap_or(defaults.server.host);
        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| ConfigError::invalid("PORT", &value, error))?,
            None => defaults.server.port,
        };

        let cookie_name = match read("SESSION_COOKIE_NAME") {
            Some(value) if is_cookie_token(&value) => value,
            Some(value) => {
                return Err(ConfigError::invalid(
                    "SESSION_COOKIE_NAME",
                    &value,
                    "must be a cookie token",
                ));
            }
            None => defaults.session.cookie_name,
        };

        let time_to_live = match read("SESSION_TTL_SECONDS") {
            Some(value) => match value.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "SESSION_TTL_SECONDS",
                        &value,
                        "must be greater than zero",
                    ));
                }
                Ok(seconds) => Duration::from_secs(seconds),
                Err(error) => return Err(ConfigError::invalid("SESSION_TTL_SECONDS", &value, error)),
            },
            None => defaults.session.time_to_live,
        };

        let capacity = match read("SESSION_CAPACITY") {
            Some(value) => match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "SESSION_CAPACITY",
                        &value,
                        "must be greater than zero",
                    ));
                }
                Ok(capacity) => capacity,
                Err(error) => return Err(ConfigError::invalid("SESSION_CAPACITY", &value, error)),
            },
            None => defaults.session.capacity,
        };

        let secure_cookie = match read("SESSION_COOKIE_SECURE") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| ConfigError::invalid("SESSION_COOKIE_SECURE", &value, "expected a boolean"))?,
            None => defaults.session.secure_cookie,
        };

        Ok(Self {
            server: ServerConfig::new(host, port),
            session: SessionConfig {
                cookie_name,
                time_to_live,
                capacity,
                secure_cookie,
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// RFC 6265 cookie-name token: visible ASCII without separators.
fn is_cookie_token(value: &str) -> bool {
    value.bytes().all(|byte| {
        byte.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&byte)
    })
}

// =============================================================================
// Tests
// =============================================================================
