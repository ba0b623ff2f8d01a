//! Layered configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. the defaults embedded from `config.default.toml`
//! 2. the user's `config.toml` (optional)
//! 3. environment variables prefixed `PARKUI__`, with `__` between nested
//!    keys (`PARKUI__SCREEN__WIDTH=1280`)

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod interface;
pub mod limits;
pub mod preset;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use preset::ConfigPresetStore;
pub use validation::{ConfigError, ConfigLoadResult, ConfigValidationError};

pub const ENV_PREFIX: &str = "PARKUI";

/// Load configuration from the defaults, `path` (if given and present) and
/// the process environment.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    load_config_with_env(path, None)
}

/// Like [`load_config`], but reads environment overrides from `env` instead of
/// the process environment when it is `Some`.
pub fn load_config_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> ConfigLoadResult {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .source(env);

    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. \
                Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
