//! Environment variable reader
//!
//! Wraps a key lookup so settings can be loaded from the real process
//! environment or from an in-memory map in tests.

use crate::error::ConfigError;

use std::str::FromStr;

/// Typed access to flat `KEY=value` settings
pub struct EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Create a reader over an arbitrary lookup function
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Trimmed value, `None` when unset or empty
    pub fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse a number, falling back to `default` when unset or empty
    pub fn number<T: FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.string(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: raw,
            }),
        }
    }

    /// Parse a finite float, falling back to `default`
    pub fn float(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        let value: f64 = self.number(key, default)?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{} is not a finite number", value),
            });
        }
        Ok(value)
    }

    /// Flag that is on only when the value is exactly `1`
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.string(key) {
            None => default,
            Some(raw) => raw == "1",
        }
    }
}

/// Reader over the real process environment
pub fn process_env() -> EnvReader<fn(&str) -> Option<String>> {
    let lookup: fn(&str) -> Option<String> = |key| std::env::var(key).ok();
    EnvReader::new(lookup)
}
