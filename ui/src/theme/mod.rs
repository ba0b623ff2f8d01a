//! # Theme System Module
//!
//! Window colour schemes. A theme assigns up to six colour slots to each
//! themeable window class; classes the theme does not mention use the
//! defaults from the descriptor table.
//!
//! ## Architecture
//!
//! - **[`ThemeManager`]** - active theme, available-theme list, autosaving
//!   mutations and colour broadcasts to open windows
//! - **[`ThemeLoader`]** - theme file discovery, reading and writing
//! - **[`descriptors`]** - static table of themeable classes and their defaults
//! - **[`predefined`]** - the two built-in themes
//! - **[`codec`]** - JSON form, including legacy byte-encoded slots
//! - **Theme Validation** - names for rename and duplicate, theme file paths
//!
//! ## Basic Usage
//!
//! ```no_run
//! use parkui::theme::{MemoryPresetStore, ThemeLoader, ThemeManager};
//! use windowing::{ScreenSize, WindowClass, WindowManager};
//!
//! let mut windows = WindowManager::new(ScreenSize::new(1024, 768));
//! let mut themes = ThemeManager::new(
//!     ThemeLoader::new("themes"),
//!     Box::new(MemoryPresetStore::new(Some("*RCT1"))),
//! );
//! themes.initialise(&mut windows);
//!
//! let toolbar = themes.colour(WindowClass::TopToolbar, 0);
//! ```
//!
//! ## Theme File Structure
//!
//! Themes are loaded from `<config dir>/parkui/themes/`, one `<name>.json`
//! file per theme. Predefined themes are never written there.

pub mod codec;
pub mod descriptors;
pub mod error;
pub mod loader;
pub mod manager;
pub mod predefined;
pub mod preset;
pub mod types;
pub mod validation;

pub use error::{ThemeError, ThemeResult};
pub use loader::ThemeLoader;
pub use manager::{AvailableTheme, ThemeManager};
pub use preset::{MemoryPresetStore, PresetStore};
pub use types::{Theme, ThemeEntry, ThemeFlags, WindowTheme};
