//! Centralized error types for Sowtime.
//!
//! Typed hierarchy with user-friendly messages for display; full error
//! context is preserved for logging.

use thiserror::Error;

use sowtime_weather::WeatherError;

/// Top-level application error type.
///
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No config directory available on this system")]
    NoConfigDir,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "Could not read settings. Check file permissions.",
            ConfigError::Parse(_) => "Settings file is malformed. Check your settings.",
            ConfigError::Serialize(_) => "Could not save settings. Please try again.",
            ConfigError::NoConfigDir => "No settings directory available. Using defaults.",
            ConfigError::Invalid(_) => "Invalid settings. Check your settings.",
        }
    }
}
