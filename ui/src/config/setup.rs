use super::defaults::DEFAULT_CONFIG;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "parkui";

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/parkui on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR_NAME);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Get the themes directory path
pub fn get_themes_dir() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("themes");
    Ok(config_dir)
}

/// Get the default log file path
pub fn get_log_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("parkui.log");
    Ok(config_dir)
}

/// Create `config_dir` and its themes folder, and write the default
/// `config.toml` unless one exists.
pub fn initialize_config_dir_at(config_dir: &Path) -> Result<PathBuf, SetupError> {
    create_dir_if_not_exists(config_dir)?;
    create_dir_if_not_exists(&config_dir.join("themes"))?;

    let config_file = config_dir.join("config.toml");
    if !config_file.exists() {
        fs::write(&config_file, DEFAULT_CONFIG).map_err(|source| SetupError::WriteFileError {
            path: config_file.clone(),
            source,
        })?;
        log::info!("Created default config file: {}", config_file.display());
    }

    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(config_file)
}

/// Initialize the standard config directory with default files
pub fn initialize_config_dir() -> Result<PathBuf, SetupError> {
    initialize_config_dir_at(&get_config_dir()?)
}

/// Create directory if it doesn't exist
pub(crate) fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // Priority order:
    // 1. ./config.toml (current directory)
    // 2. Standard OS config directory
    let current_dir_config = PathBuf::from("config.toml");
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_determination() {
        let config_dir = assert_ok!(get_config_dir());
        assert!(config_dir.to_string_lossy().contains("parkui"));
    }

    #[test]
    fn test_themes_dir_is_inside_config_dir() {
        let config_dir = assert_ok!(get_config_dir());
        let themes_dir = assert_ok!(get_themes_dir());
        assert!(themes_dir.starts_with(config_dir));
    }

    #[test]
    fn test_initialize_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("parkui");

        let config_file = assert_ok!(initialize_config_dir_at(&config_dir));
        assert!(config_dir.join("themes").is_dir());
        assert_eq!(fs::read_to_string(&config_file).unwrap(), DEFAULT_CONFIG);

        fs::write(&config_file, "[screen]\nwidth = 800\n").unwrap();
        assert_ok!(initialize_config_dir_at(&config_dir));
        assert_eq!(
            fs::read_to_string(&config_file).unwrap(),
            "[screen]\nwidth = 800\n"
        );
    }
}
