use std::env;

use crate::error::ConfigError;

/// The maximum number of request body bytes buffered before decoding.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The message written when a request body cannot be decoded and the caller supplied none.
pub const DEFAULT_DECODE_MESSAGE: &str = "Invalid request payload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for buffering an inbound body into an exchange.
    pub body_limit: usize,

    /// Append the underlying decode error to the default bad request message.
    pub verbose_decode_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
            verbose_decode_errors: false,
        }
    }
}

impl Config {
    /// Reads `BODY_LIMIT` and `VERBOSE_DECODE_ERRORS`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("BODY_LIMIT") {
            config.body_limit = value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BODY_LIMIT",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("VERBOSE_DECODE_ERRORS") {
            config.verbose_decode_errors = parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "VERBOSE_DECODE_ERRORS",
                value,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
