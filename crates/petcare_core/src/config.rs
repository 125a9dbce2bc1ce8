//! Runtime configuration from environment variables.
//!
//! # Responsibility
//! - Resolve log level, optional log directory and backend selection.
//! - Open the configured data backend.
//!
//! # Invariants
//! - Unset variables fall back to defaults; malformed values are errors.
//! - Logging stays off unless a log directory is configured.

use crate::logging::{default_log_level, normalize_level};
use crate::repo::disconnected::DisconnectedBackend;
use crate::repo::in_memory::InMemoryBackend;
use crate::repo::DataBackend;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PETCARE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PETCARE_LOG_DIR";
pub const ENV_BACKEND: &str = "PETCARE_BACKEND";

/// Which data backend serves the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// No data service: reads are empty, writes fail with `NotConnected`.
    #[default]
    None,
    /// In-process store, lost on exit.
    Memory,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Memory => "memory",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }

    /// Opens a fresh backend of this kind.
    pub fn open(self) -> Box<dyn DataBackend> {
        match self {
            Self::None => Box::new(DisconnectedBackend::new()),
            Self::Memory => Box::new(InMemoryBackend::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
    UnknownBackend(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
            Self::UnknownBackend(value) => write!(
                f,
                "{ENV_BACKEND}: unknown backend `{value}`; expected none|memory"
            ),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    pub backend: BackendKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            backend: BackendKind::None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|value| !value.trim().is_empty()) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty()) {
            let path = PathBuf::from(dir.trim());
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(path));
            }
            config.log_dir = Some(path);
        }

        if let Some(backend) = lookup(ENV_BACKEND) {
            config.backend = BackendKind::parse(&backend)?;
        }

        Ok(config)
    }
}
