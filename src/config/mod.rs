//! Configuration system
//!
//! All settings come from flat environment variables, read once at startup
//! into an immutable [`Settings`] value that is passed to every component.

pub mod env;

pub use env::EnvReader;

use crate::error::ConfigError;
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// Default CPU alert threshold (%)
pub const DEFAULT_CPU_WARN: f64 = 85.0;
/// Default RAM alert threshold (%)
pub const DEFAULT_RAM_WARN: f64 = 90.0;
/// Default network alert threshold (Mbps)
pub const DEFAULT_NET_WARN_MBPS: f64 = 200.0;
/// Default network sampling window (seconds)
pub const DEFAULT_SAMPLE_SECONDS: f64 = 2.0;
/// Default SMTP port (STARTTLS submission)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Alert thresholds and sampling window
    pub thresholds: Thresholds,
    /// Directory holding `metrics.csv` and `metrics.jsonl`
    pub log_dir: PathBuf,
    /// Recipient delivery settings
    pub email: EmailSettings,
}

/// Alert trigger levels plus the network sampling window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub net_mbps: f64,
    /// Network sampling window; may be zero or negative, see [`Thresholds::sample_window`]
    pub sample_seconds: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_percent: DEFAULT_CPU_WARN,
            ram_percent: DEFAULT_RAM_WARN,
            net_mbps: DEFAULT_NET_WARN_MBPS,
            sample_seconds: DEFAULT_SAMPLE_SECONDS,
        }
    }
}

impl Thresholds {
    /// How long to wait between the two counter snapshots
    ///
    /// Non-positive windows mean no wait at all.
    pub fn sample_window(&self) -> Duration {
        Duration::try_from_secs_f64(self.sample_seconds.max(0.0)).unwrap_or_default()
    }
}

/// Recipient delivery configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmailSettings {
    /// Alert recipient; `None` disables mail and SMTP entirely
    pub recipient: Option<String>,
    pub smtp: SmtpSettings,
}

/// SMTP relay configuration, used when the local `mail` command fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmtpSettings {
    /// Relay host; `None` disables the SMTP fallback
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    #[serde(serialize_with = "redact")]
    pub password: Option<String>,
    pub starttls: bool,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_SMTP_PORT,
            user: None,
            password: None,
            starttls: true,
        }
    }
}

fn redact<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_some("********"),
        None => serializer.serialize_none(),
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(&env::process_env())
    }

    /// Load settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_reader(&EnvReader::new(lookup))
    }

    fn from_reader<F>(env: &EnvReader<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sample_seconds = env.float("SAMPLE_SECONDS", DEFAULT_SAMPLE_SECONDS)?;
        if Duration::try_from_secs_f64(sample_seconds.max(0.0)).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "SAMPLE_SECONDS".to_string(),
                message: format!("{} seconds is out of range", sample_seconds),
            });
        }

        let thresholds = Thresholds {
            cpu_percent: env.float("CPU_WARN", DEFAULT_CPU_WARN)?,
            ram_percent: env.float("RAM_WARN", DEFAULT_RAM_WARN)?,
            net_mbps: env.float("NET_WARN_Mbps", DEFAULT_NET_WARN_MBPS)?,
            sample_seconds,
        };

        let log_dir = env
            .string("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        let smtp = SmtpSettings {
            host: env.string("SMTP_HOST"),
            port: env.number("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            user: env.string("SMTP_USER"),
            password: env.string("SMTP_PASS"),
            starttls: env.flag("SMTP_STARTTLS", true),
        };

        Ok(Self {
            thresholds,
            log_dir,
            email: EmailSettings {
                recipient: env.string("EMAIL_TO"),
                smtp,
            },
        })
    }

    /// Path of the tabular log
    pub fn csv_path(&self) -> PathBuf {
        self.log_dir.join(crate::store::CSV_FILE_NAME)
    }

    /// Path of the structured log
    pub fn jsonl_path(&self) -> PathBuf {
        self.log_dir.join(crate::store::JSONL_FILE_NAME)
    }
}

/// User-writable default log directory
pub fn default_log_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".local").join("var").join("syshealth"),
        None => {
            log::warn!("No home directory found; logging under the temp directory");
            std::env::temp_dir().join("syshealth")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[("LOG_DIR", "/tmp/sh")]).unwrap();
        assert_eq!(settings.thresholds, Thresholds::default());
        assert_eq!(settings.thresholds.cpu_percent, 85.0);
        assert_eq!(settings.thresholds.ram_percent, 90.0);
        assert_eq!(settings.thresholds.net_mbps, 200.0);
        assert_eq!(settings.thresholds.sample_seconds, 2.0);
        assert_eq!(settings.email.recipient, None);
        assert_eq!(settings.email.smtp, SmtpSettings::default());
        assert!(settings.email.smtp.starttls);
        assert_eq!(settings.email.smtp.port, 587);
    }

    #[test]
    fn test_overrides() {
        let settings = load(&[
            ("CPU_WARN", "10"),
            ("RAM_WARN", "50.5"),
            ("NET_WARN_Mbps", "1"),
            ("SAMPLE_SECONDS", "0.5"),
            ("LOG_DIR", "/var/tmp/health"),
            ("EMAIL_TO", "ops@example.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "2525"),
            ("SMTP_USER", "bot@example.com"),
            ("SMTP_PASS", "secret"),
            ("SMTP_STARTTLS", "0"),
        ])
        .unwrap();

        assert_eq!(settings.thresholds.cpu_percent, 10.0);
        assert_eq!(settings.thresholds.ram_percent, 50.5);
        assert_eq!(settings.thresholds.net_mbps, 1.0);
        assert_eq!(settings.thresholds.sample_window(), Duration::from_millis(500));
        assert_eq!(settings.log_dir, PathBuf::from("/var/tmp/health"));
        assert_eq!(settings.email.recipient.as_deref(), Some("ops@example.com"));
        assert_eq!(settings.email.smtp.host.as_deref(), Some("smtp.example.com"));
        assert_eq!(settings.email.smtp.port, 2525);
        assert!(!settings.email.smtp.starttls);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let settings = load(&[("CPU_WARN", ""), ("EMAIL_TO", "  "), ("LOG_DIR", "/x")]).unwrap();
        assert_eq!(settings.thresholds.cpu_percent, DEFAULT_CPU_WARN);
        assert_eq!(settings.email.recipient, None);
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let err = load(&[("SMTP_PORT", "smtp")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { ref key, .. } if key == "SMTP_PORT"));

        let err = load(&[("RAM_WARN", "9O")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { ref key, .. } if key == "RAM_WARN"));
    }

    #[test]
    fn test_negative_window_means_no_wait() {
        let settings = load(&[("SAMPLE_SECONDS", "-1")]).unwrap();
        assert_eq!(settings.thresholds.sample_seconds, -1.0);
        assert_eq!(settings.thresholds.sample_window(), Duration::ZERO);
    }

    #[test]
    fn test_huge_window_rejected() {
        let err = load(&[("SAMPLE_SECONDS", "1e300")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_log_paths() {
        let settings = load(&[("LOG_DIR", "/srv/health")]).unwrap();
        assert_eq!(settings.csv_path(), PathBuf::from("/srv/health/metrics.csv"));
        assert_eq!(settings.jsonl_path(), PathBuf::from("/srv/health/metrics.jsonl"));
    }

    #[test]
    fn test_password_redacted_in_json() {
        let settings = load(&[("SMTP_PASS", "hunter2"), ("LOG_DIR", "/x")]).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("********"));
    }
}
