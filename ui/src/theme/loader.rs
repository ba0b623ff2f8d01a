use crate::theme::codec;
use crate::theme::error::{ThemeError, ThemeResult};
use crate::theme::types::Theme;
use crate::theme::validation::ThemeFileValidator;
use crate::validation::Validator;
use std::fs;
use std::path::{Path, PathBuf};

/// Theme loader responsible for reading and writing theme files in one directory
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    themes_dir: PathBuf,
    file_validator: ThemeFileValidator,
}

impl ThemeLoader {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            file_validator: ThemeFileValidator,
        }
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// `<themes dir>/<name>.json`
    pub fn path_for_name(&self, name: &str) -> PathBuf {
        self.themes_dir.join(format!("{name}.json"))
    }

    pub fn ensure_directory(&self) -> ThemeResult<()> {
        fs::create_dir_all(&self.themes_dir).map_err(|source| ThemeError::Io {
            path: self.themes_dir.clone(),
            source,
        })
    }

    /// Lists `*.json` files in the themes directory (non-recursive), sorted by
    /// file name. A missing directory yields an empty list.
    pub fn discover(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.themes_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!(
                    "Themes directory '{}' not readable: {}",
                    self.themes_dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("Failed to read directory entry: {e}");
                    None
                }
            })
            .filter(|path| path.is_file() && self.file_validator.validate(path).is_ok())
            .collect();

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        paths
    }

    pub fn load(&self, path: &Path) -> ThemeResult<Theme> {
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        codec::from_str(&text).inspect_err(|e| {
            log::warn!("Theme file '{}' is invalid: {}", path.display(), e);
        })
    }

    pub fn save(&self, theme: &Theme, path: &Path) -> ThemeResult<()> {
        let text = codec::to_string_pretty(theme)?;
        fs::write(path, text).map_err(|source| {
            log::error!("Failed to write theme '{}': {}", path.display(), source);
            ThemeError::Io {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn rename(&self, from: &Path, to: &Path) -> ThemeResult<()> {
        fs::rename(from, to).map_err(|source| ThemeError::Io {
            path: from.to_path_buf(),
            source,
        })
    }

    pub fn remove(&self, path: &Path) -> ThemeResult<()> {
        fs::remove_file(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
