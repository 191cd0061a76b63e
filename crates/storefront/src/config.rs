//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DEMO_SMOKE_DATA_DIR` - Directory for persisted data (default: `.demo-smoke`)
//! - `DEMO_SMOKE_SEED_DEMO_USER` - Install the demo account into an empty store (default: true)
//! - `DEMO_SMOKE_PICKUP_OPEN_HOUR` - First pickup slot, 0-23 (default: 10)
//! - `DEMO_SMOKE_PICKUP_CLOSE_HOUR` - Last pickup slot, 0-23 (default: 20)
//! - `DEMO_SMOKE_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::checkout::PickupHours;

const DEFAULT_DATA_DIR: &str = ".demo-smoke";
const SESSION_SUBDIR: &str = "session";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persistent store.
    pub data_dir: PathBuf,
    /// Whether an empty users list gets the demo account.
    pub seed_demo_user: bool,
    /// Hours offered as pickup slots.
    pub pickup_hours: PickupHours,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_demo_user: true,
            pickup_hours: PickupHours::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_or_default(&lookup, "DEMO_SMOKE_DATA_DIR", DEFAULT_DATA_DIR));
        let seed_demo_user = parse_bool(&get_or_default(&lookup, "DEMO_SMOKE_SEED_DEMO_USER", "true"))
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "DEMO_SMOKE_SEED_DEMO_USER".to_string(),
                    "expected true or false".to_string(),
                )
            })?;

        let open = parse_hour(&lookup, "DEMO_SMOKE_PICKUP_OPEN_HOUR", "10")?;
        let close = parse_hour(&lookup, "DEMO_SMOKE_PICKUP_CLOSE_HOUR", "20")?;
        if open > close {
            return Err(ConfigError::InvalidEnvVar(
                "DEMO_SMOKE_PICKUP_OPEN_HOUR".to_string(),
                format!("opening hour {open} is after closing hour {close}"),
            ));
        }

        let log_format = get_or_default(&lookup, "DEMO_SMOKE_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("DEMO_SMOKE_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            data_dir,
            seed_demo_user,
            pickup_hours: PickupHours { open, close },
            log_format,
        })
    }

    /// Directory of the session-scoped store.
    #[must_use]
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.join(SESSION_SUBDIR)
    }

    /// Directory of the persistent store.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value. Blank values count as unset.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse an hour of the day (0-23).
fn parse_hour(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<u8, ConfigError> {
    let raw = get_or_default(lookup, key, default);
    let hour = raw
        .trim()
        .parse::<u8>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if hour > 23 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("hour must be 0-23 (got {hour})"),
        ));
    }
    Ok(hour)
}
