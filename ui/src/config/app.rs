use super::{
    LoggingConfig,
    interface::{InterfaceConfig, ScreenConfig, ThemesConfig},
    limits::*,
    setup,
    validation::ConfigValidationError,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    interface: InterfaceConfig,
    #[serde(default)]
    screen: ScreenConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    themes: ThemesConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let proximity = self.interface.window_snap_proximity();
        if !(0..=MAX_WINDOW_SNAP_PROXIMITY).contains(&proximity) {
            errors.push(ConfigValidationError::SnapProximity {
                configured: proximity,
                max_limit: MAX_WINDOW_SNAP_PROXIMITY,
            });
        }

        let (width, height) = (self.screen.width(), self.screen.height());
        if !(MIN_SCREEN_WIDTH..=MAX_SCREEN_DIMENSION).contains(&width)
            || !(MIN_SCREEN_HEIGHT..=MAX_SCREEN_DIMENSION).contains(&height)
        {
            errors.push(ConfigValidationError::ScreenSize { width, height });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Themes directory: the configured one, else `<config dir>/themes`
    pub fn themes_dir(&self) -> Result<PathBuf, setup::SetupError> {
        match self.themes.directory() {
            Some(dir) => Ok(dir.to_path_buf()),
            None => setup::get_themes_dir(),
        }
    }

    // Configuration section accessors
    pub fn interface(&self) -> &InterfaceConfig {
        &self.interface
    }

    pub fn screen(&self) -> &ScreenConfig {
        &self.screen
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn themes(&self) -> &ThemesConfig {
        &self.themes
    }
}
