use super::app::AppConfig;
use super::setup::SetupError;
use std::path::PathBuf;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid window_snap_proximity: {configured} (min: 0, max: {max_limit})")]
    SnapProximity { configured: i32, max_limit: i32 },
    #[error("Invalid screen size: {width}x{height}")]
    ScreenSize { width: i32, height: i32 },
    #[error("Invalid log level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::SnapProximity {
                configured,
                max_limit,
            } => {
                format!(
                    "Window snap proximity out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: 0 - {max_limit}\n\n\
                    Please update window_snap_proximity in the [interface] section of config.toml."
                )
            }
            ConfigValidationError::ScreenSize { width, height } => {
                format!(
                    "Screen size out of range!\n\n\
                    Your configured value: {width}x{height}\n\n\
                    Please update width and height in the [screen] section of config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Valid levels: off, error, warn, info, debug, trace\n\n\
                    Please update level in the [logging] section of config.toml."
                )
            }
        }
    }
}

/// Errors reading or writing configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialise config file: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn into_config(self) -> crate::error::AppResult<AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(crate::error::AppError::Config(msg))
            }
        }
    }
}
