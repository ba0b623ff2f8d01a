use serde::Deserialize;
use std::path::{Path, PathBuf};
use windowing::ScreenSize;

/// Interface behaviour settings (`[interface]`)
#[derive(Debug, Deserialize, Default, Clone)]
pub struct InterfaceConfig {
    current_theme_preset: Option<String>,
    window_snap_proximity: Option<i32>,
    title_demo: Option<bool>,
}

impl InterfaceConfig {
    /// Config name of the selected theme (`*RCT2`, or a theme file stem)
    pub fn current_theme_preset(&self) -> Option<&str> {
        self.current_theme_preset
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Distance in pixels within which dragged windows snap to edges; 0 disables snapping
    pub fn window_snap_proximity(&self) -> i32 {
        self.window_snap_proximity.unwrap_or(5)
    }

    /// Start in title-demo mode, which disables viewport wheel zoom
    pub fn title_demo(&self) -> bool {
        self.title_demo.unwrap_or(false)
    }
}

/// Screen dimensions (`[screen]`)
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScreenConfig {
    width: Option<i32>,
    height: Option<i32>,
}

impl ScreenConfig {
    pub fn width(&self) -> i32 {
        self.width.unwrap_or(1024)
    }

    pub fn height(&self) -> i32 {
        self.height.unwrap_or(768)
    }

    pub fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width(), self.height())
    }
}

/// Theme storage (`[themes]`)
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemesConfig {
    directory: Option<PathBuf>,
}

impl ThemesConfig {
    /// Explicit themes directory; `None` means the standard location
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}
