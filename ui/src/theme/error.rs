use crate::theme::validation::ThemeNameError;
use std::path::PathBuf;
use thiserror::Error;
use windowing::WindowClass;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to access theme file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed theme: {0}")]
    Malformed(String),
    #[error("Window class {0:?} has no theme descriptor")]
    UnknownDescriptor(WindowClass),
    #[error("Theme '{0}' is predefined and cannot be modified")]
    ReadOnly(String),
    #[error("The current theme has no file path")]
    NoCurrentPath,
    #[error("Colour slot {slot} does not exist for {class:?}")]
    SlotOutOfRange { class: WindowClass, slot: usize },
    #[error("No available theme at index {0}")]
    IndexOutOfRange(usize),
    #[error(transparent)]
    InvalidName(#[from] ThemeNameError),
}

pub type ThemeResult<T> = Result<T, ThemeError>;
