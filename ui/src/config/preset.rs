use super::validation::ConfigError;
use crate::error::AppResult;
use crate::theme::PresetStore;
use std::fs;
use std::path::PathBuf;

/// Persists the theme preset name into `[interface] current_theme_preset` of
/// a TOML config file, leaving the rest of the file as it was.
#[derive(Debug, Clone)]
pub struct ConfigPresetStore {
    path: PathBuf,
    current: Option<String>,
}

impl ConfigPresetStore {
    pub fn new(path: impl Into<PathBuf>, current: Option<&str>) -> Self {
        Self {
            path: path.into(),
            current: current.map(str::to_owned),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write(&self, name: &str) -> Result<(), ConfigError> {
        let mut document = match fs::read_to_string(&self.path) {
            Ok(text) => text.parse::<toml::Table>()?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let interface = document
            .entry("interface")
            .or_insert(toml::Value::Table(toml::Table::new()));
        if !interface.is_table() {
            *interface = toml::Value::Table(toml::Table::new());
        }
        if let toml::Value::Table(interface) = interface {
            interface.insert(
                "current_theme_preset".to_string(),
                toml::Value::String(name.to_string()),
            );
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            super::setup::create_dir_if_not_exists(parent)?;
        }
        let text = toml::to_string_pretty(&document)?;
        fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PresetStore for ConfigPresetStore {
    fn current_preset(&self) -> Option<String> {
        self.current.clone()
    }

    fn store_preset(&mut self, name: &str) -> AppResult<()> {
        self.write(name)?;
        self.current = Some(name.to_string());
        log::debug!(
            "Stored theme preset '{}' in {}",
            name,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_back_preserves_other_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[screen]\nwidth = 800\n\n[interface]\ntitle_demo = true\n").unwrap();

        let mut store = ConfigPresetStore::new(&path, None);
        assert_ok!(store.store_preset("Dusk"));
        assert_some_eq!(store.current_preset(), "Dusk".to_string());

        let table: toml::Table = fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(table["screen"]["width"].as_integer(), Some(800));
        assert_eq!(table["interface"]["title_demo"].as_bool(), Some(true));
        assert_eq!(
            table["interface"]["current_theme_preset"].as_str(),
            Some("Dusk")
        );
    }

    #[test]
    fn test_write_back_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut store = ConfigPresetStore::new(&path, Some("*RCT1"));
        assert_ok!(store.store_preset("*RCT2"));
        assert!(path.exists());
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[interface\n").unwrap();

        let mut store = ConfigPresetStore::new(&path, Some("*RCT1"));
        assert_err!(store.store_preset("*RCT2"));
        assert_some_eq!(store.current_preset(), "*RCT1".to_string());
    }
}
