//! # ParkUI Library
//!
//! Window colour themes and the runtime context that ties them to the
//! window registry from the `windowing` crate.
//!
//! ## Features
//!
//! - Per-class colour schemes with built-in defaults for every themeable window
//! - Two read-only predefined themes plus user themes stored as JSON files
//! - Autosaving theme edits, with rename, duplicate and delete
//! - Layered configuration (embedded defaults, `config.toml`, environment)
//! - Background jobs delivered to their owning windows
//!
//! ## Modules
//!
//! - [`app`] - The UI context and background task manager
//! - [`cli`] - Command-line theme management
//! - [`config`] - Configuration loading, validation and preset write-back
//! - [`error`] - Application error type
//! - [`logger`] - Logging setup
//! - [`theme`] - Theme types, descriptors, files and the theme manager
//! - [`validation`] - Input validation trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::{AppError, AppResult};

// Re-export validation trait for broader use
pub use validation::Validator;
