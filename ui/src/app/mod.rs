//! # Application Module
//!
//! Runtime state shared by the interface: the [`context::UiContext`] that
//! owns the window registry, the theme manager and the text-input session,
//! plus the [`task_manager`] that runs background jobs for windows.
//!
//! ## Usage
//!
//! ```no_run
//! use parkui::app::context::UiContext;
//! use parkui::config::AppConfig;
//! use parkui::theme::{MemoryPresetStore, ThemeLoader, ThemeManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let themes = ThemeManager::new(
//!         ThemeLoader::new("themes"),
//!         Box::new(MemoryPresetStore::new(None)),
//!     );
//!     let mut ui = UiContext::new(&config, themes, tokio::runtime::Handle::current());
//!     ui.initialise();
//! }
//! ```

pub mod context;
pub mod task_manager;
