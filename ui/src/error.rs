use crate::config::{ConfigError, ConfigValidationError};
use crate::theme::ThemeError;
use crate::theme::validation::ThemeNameError;
use std::fmt::Display;
use windowing::WindowError;

/// Application-wide error types.
///
/// Each subsystem keeps its own typed error; `AppError` flattens them into a
/// cloneable value with a message suitable for logs and the command line.
///
/// # Error Categories
///
/// - [`Theme`] - theme files, predefined-theme protection
/// - [`Validation`] - user-supplied names and values
/// - [`Window`] - window registry lookups
/// - [`Config`] - configuration loading, validation and write-back
/// - [`Io`] - other file system failures
/// - [`Task`] - background jobs
///
/// [`Theme`]: AppError::Theme
/// [`Validation`]: AppError::Validation
/// [`Window`]: AppError::Window
/// [`Config`]: AppError::Config
/// [`Io`]: AppError::Io
/// [`Task`]: AppError::Task
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Theme loading, saving or mutation failures.
    Theme(String),

    /// Input rejected before any state changed. The message is meant for the
    /// user as-is.
    Validation(String),

    /// Window registry errors (unknown window, duplicate identity).
    Window(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// File system failures outside of themes and configuration.
    Io(String),

    /// Background job failures and cancellations.
    Task(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::Window(msg) => write!(f, "Window Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Task(msg) => write!(f, "Task Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        match err {
            ThemeError::InvalidName(name_error) => name_error.into(),
            other => AppError::Theme(other.to_string()),
        }
    }
}

impl From<ThemeNameError> for AppError {
    fn from(err: ThemeNameError) -> Self {
        AppError::Validation(err.user_message())
    }
}

impl From<WindowError> for AppError {
    fn from(err: WindowError) -> Self {
        AppError::Window(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(err: ConfigValidationError) -> Self {
        AppError::Config(err.user_message())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
