//! Client configuration.
//!
//! Settings live in `~/.config/zoomlaunch/config.toml` by default. The
//! meetings themselves are stored separately, in a JSON file whose location
//! can be set here:
//!
//! ```toml
//! debug = false
//!
//! [meetings]
//! path = "/home/me/meetings.json"
//!
//! [launch]
//! scheme = "zoommtg"
//!
//! [schedule]
//! window_minutes = 20
//!
//! [logging]
//! format = "compact"
//! filter = "zoomlaunch=info"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zoomlaunch_core::{DEFAULT_SCHEME, DEFAULT_WINDOW_MINUTES, TracingOutputFormat};

use crate::error::{ClientError, ClientResult};

/// Configuration for the zoomlaunch client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Meeting file settings.
    pub meetings: MeetingSettings,

    /// Launch settings.
    pub launch: LaunchSettings,

    /// Next-meeting settings.
    pub schedule: ScheduleSettings,

    /// Log output settings.
    pub logging: LoggingSettings,
}

/// Where the meeting list is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
    /// Path to the meeting JSON file.
    pub path: Option<PathBuf>,
}

/// How meetings are handed to the desktop client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchSettings {
    /// URL scheme of the deep link.
    pub scheme: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Settings for `next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Maximum distance in minutes between now and a meeting's slot.
    pub window_minutes: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

impl From<LogFormat> for TracingOutputFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}

/// How log events are written to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Output format.
    pub format: LogFormat,

    /// Filter directive (`RUST_LOG` syntax) replacing the default level.
    pub filter: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            ClientError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> ClientResult<()> {
        let scheme = &self.launch.scheme;
        let valid_scheme = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(ClientError::config(format!(
                "launch.scheme '{}' is not a valid URL scheme",
                scheme
            )));
        }
        Ok(())
    }

    /// Returns the meeting file path, falling back to the default location.
    pub fn meetings_path(&self) -> PathBuf {
        self.meetings
            .path
            .clone()
            .unwrap_or_else(Self::default_meetings_path)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default meeting file path.
    pub fn default_meetings_path() -> PathBuf {
        Self::default_config_dir().join("meetings.json")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zoomlaunch")
    }
}
