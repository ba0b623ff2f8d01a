use crate::validation::Validator;
use std::path::Path;
use thiserror::Error;

const INVALID_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validation errors for user-supplied theme names and theme files
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeNameError {
    #[error("Theme name cannot be empty")]
    Empty,
    #[error("Theme name '{name}' contains the invalid character {character:?}")]
    InvalidCharacter { name: String, character: char },
    #[error("A theme named '{name}' already exists")]
    Duplicate { name: String },
    #[error("'{path}' is not a theme file")]
    NotAThemeFile { path: String },
}

impl ThemeNameError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeNameError::Empty => "Please enter a name for the theme.".to_string(),
            ThemeNameError::InvalidCharacter { name, character } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    The character {character:?} cannot be used in file names.\n\n\
                    Please choose a name without / \\ : * ? \" < > | or control characters."
                )
            }
            ThemeNameError::Duplicate { name } => {
                format!(
                    "A theme called '{name}' already exists.\n\n\
                    Please choose a different name."
                )
            }
            ThemeNameError::NotAThemeFile { path } => {
                format!(
                    "Invalid theme file: '{path}'\n\n\
                    Theme files must have the .json extension."
                )
            }
        }
    }
}

/// Validator for names given to rename and duplicate.
///
/// Names become file stems, so they must be non-empty, usable in a file name
/// and must not collide (ignoring case) with a theme already in the list.
pub struct ThemeNameValidator {
    existing_names: Vec<String>,
}

impl ThemeNameValidator {
    pub fn new<I, S>(existing_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing_names: existing_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeNameError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Err(ThemeNameError::Empty);
        }

        if let Some(character) = input
            .chars()
            .find(|c| c.is_control() || INVALID_FILE_NAME_CHARS.contains(c))
        {
            return Err(ThemeNameError::InvalidCharacter {
                name: input.to_string(),
                character,
            });
        }

        let lowered = input.to_lowercase();
        if self
            .existing_names
            .iter()
            .any(|name| name.to_lowercase() == lowered)
        {
            return Err(ThemeNameError::Duplicate {
                name: input.to_string(),
            });
        }

        Ok(())
    }
}

/// Accepts paths with a `.json` extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeFileValidator;

impl Validator<Path> for ThemeFileValidator {
    type Error = ThemeNameError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        let is_json = input
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(())
        } else {
            Err(ThemeNameError::NotAThemeFile {
                path: input.display().to_string(),
            })
        }
    }
}
