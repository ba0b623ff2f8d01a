use crate::theme::descriptors::descriptor_for_class;
use crate::theme::error::{ThemeError, ThemeResult};
use crate::theme::loader::ThemeLoader;
use crate::theme::predefined::{VANILLA_INDEX, predefined_themes, vanilla};
use crate::theme::preset::PresetStore;
use crate::theme::types::{Theme, ThemeFlags, WindowTheme};
use crate::theme::validation::{ThemeNameError, ThemeNameValidator};
use crate::validation::Validator;
use std::path::{Path, PathBuf};
use windowing::{ColourWithFlags, Window, WindowClass, WindowFlags, WindowManager};

/// One selectable theme: a predefined theme or a file in the themes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTheme {
    /// Name stored in configuration: `*RCT1` style for predefined themes,
    /// the file stem otherwise.
    pub config_name: String,
    pub display_name: String,
    pub path: Option<PathBuf>,
}

enum ActiveTheme {
    Predefined(&'static Theme),
    Owned(Box<Theme>),
}

impl ActiveTheme {
    fn get(&self) -> &Theme {
        match self {
            ActiveTheme::Predefined(theme) => *theme,
            ActiveTheme::Owned(theme) => theme.as_ref(),
        }
    }
}

/// Tracks the active theme and the list of themes the user can pick from.
///
/// Mutations apply to the current theme and are saved straight back to its
/// file. Predefined themes are read-only; duplicate one to get an editable
/// copy.
pub struct ThemeManager {
    current: ActiveTheme,
    current_path: Option<PathBuf>,
    available: Vec<AvailableTheme>,
    active_index: Option<usize>,
    loader: ThemeLoader,
    presets: Box<dyn PresetStore>,
}

impl ThemeManager {
    pub fn new(loader: ThemeLoader, presets: Box<dyn PresetStore>) -> Self {
        let mut manager = Self {
            current: ActiveTheme::Predefined(vanilla()),
            current_path: None,
            available: Vec::new(),
            active_index: None,
            loader,
            presets,
        };
        manager.available = manager.predefined_entries();
        manager
    }

    fn predefined_entries(&self) -> Vec<AvailableTheme> {
        predefined_themes()
            .iter()
            .map(|predefined| AvailableTheme {
                config_name: predefined.theme.name.clone(),
                display_name: predefined.title.to_string(),
                path: None,
            })
            .collect()
    }

    /// Rebuilds the available list: predefined themes first, then theme files
    /// in file-name order.
    pub fn load_available_themes(&mut self) {
        let mut available = self.predefined_entries();
        for path in self.loader.discover() {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if self.current_path.as_deref() == Some(path.as_path()) {
                self.active_index = Some(available.len());
            }
            available.push(AvailableTheme {
                config_name: stem.to_string(),
                display_name: stem.to_string(),
                path: Some(path.clone()),
            });
        }
        log::debug!("Found {} available themes", available.len());
        self.available = available;
    }

    /// Startup: activates the preset named in configuration, falling back to
    /// vanilla (and writing vanilla's name back) when it cannot be found.
    pub fn initialise(&mut self, windows: &mut WindowManager) {
        self.load_available_themes();
        self.load_predefined(vanilla(), windows);
        self.active_index = Some(VANILLA_INDEX);

        let preset = self
            .presets
            .current_preset()
            .filter(|name| !name.is_empty());
        let valid = match preset {
            Some(name) => self.load_by_config_name(&name, windows),
            None => false,
        };

        if !valid {
            self.store_preset(VANILLA_INDEX);
        }
        log::info!(
            "Theme manager initialised with '{}'",
            self.current_theme().name
        );
    }

    fn load_by_config_name(&mut self, name: &str, windows: &mut WindowManager) -> bool {
        let Some(index) = self
            .available
            .iter()
            .position(|theme| theme.config_name == name)
        else {
            log::warn!("Configured theme preset '{name}' is not available");
            return false;
        };

        match self.available[index].path.clone() {
            None => self.load_predefined(predefined_themes()[index].theme, windows),
            Some(path) => {
                if !self.load_theme_file(&path, windows) {
                    self.active_index = Some(VANILLA_INDEX);
                    return false;
                }
            }
        }
        self.active_index = Some(index);
        true
    }

    /// Activates a predefined theme. Re-activating the active one does nothing.
    pub fn load_predefined(&mut self, theme: &'static Theme, windows: &mut WindowManager) {
        if let ActiveTheme::Predefined(current) = self.current {
            if std::ptr::eq(current, theme) {
                return;
            }
        }
        self.activate(ActiveTheme::Predefined(theme), windows);
    }

    /// Reads and activates a theme file. Any failure activates vanilla and
    /// returns `false`.
    pub fn load_theme_file(&mut self, path: &Path, windows: &mut WindowManager) -> bool {
        match self.loader.load(path) {
            Ok(theme) => {
                self.activate(ActiveTheme::Owned(Box::new(theme)), windows);
                self.current_path = Some(path.to_path_buf());
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to load theme '{}', using vanilla: {}",
                    path.display(),
                    e
                );
                self.load_predefined(vanilla(), windows);
                false
            }
        }
    }

    fn activate(&mut self, theme: ActiveTheme, windows: &mut WindowManager) {
        self.current = theme;
        self.current_path = None;
        windows.invalidate_screen();
    }

    /// Selects entry `index` of the available list, persists its name and
    /// recolours every open window. A theme file that fails to load leaves
    /// vanilla selected.
    pub fn set_active_available_theme(
        &mut self,
        index: usize,
        windows: &mut WindowManager,
    ) -> ThemeResult<()> {
        if index >= self.available.len() {
            return Err(ThemeError::IndexOutOfRange(index));
        }

        let mut index = index;
        if index < self.num_predefined() {
            self.load_predefined(predefined_themes()[index].theme, windows);
        } else {
            if let Some(path) = self.available[index].path.clone() {
                self.load_theme_file(&path, windows);
            }
            if self.current_path.is_none() {
                index = VANILLA_INDEX;
            }
        }

        self.active_index = Some(index);
        self.store_preset(index);
        self.update_all_colour_schemes(windows);
        Ok(())
    }

    fn store_preset(&mut self, index: usize) {
        let Some(name) = self.available_theme_config_name(index).map(str::to_owned) else {
            return;
        };
        if let Err(e) = self.presets.store_preset(&name) {
            log::warn!("Failed to store theme preset '{name}': {e}");
        }
    }

    pub fn current_theme(&self) -> &Theme {
        self.current.get()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn themes_dir(&self) -> &Path {
        self.loader.themes_dir()
    }

    pub fn presets(&self) -> &dyn PresetStore {
        self.presets.as_ref()
    }

    pub fn num_predefined(&self) -> usize {
        predefined_themes().len()
    }

    pub fn available_themes(&self) -> &[AvailableTheme] {
        &self.available
    }

    pub fn available_theme_name(&self, index: usize) -> Option<&str> {
        self.available
            .get(index)
            .map(|theme| theme.display_name.as_str())
    }

    pub fn available_theme_config_name(&self, index: usize) -> Option<&str> {
        self.available
            .get(index)
            .map(|theme| theme.config_name.as_str())
    }

    pub fn available_theme_path(&self, index: usize) -> Option<&Path> {
        self.available
            .get(index)
            .and_then(|theme| theme.path.as_deref())
    }

    /// Case-insensitive lookup by display name.
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        let lowered = name.to_lowercase();
        self.available
            .iter()
            .position(|theme| theme.display_name.to_lowercase() == lowered)
    }

    /// Colour of `slot` for `class`: the theme entry, else the class default,
    /// else black.
    pub fn colour(&self, class: WindowClass, slot: usize) -> ColourWithFlags {
        self.window_theme(class)
            .and_then(|theme| theme.colours.get(slot).copied())
            .unwrap_or_default()
    }

    pub fn flags(&self) -> ThemeFlags {
        self.current_theme().flags
    }

    fn window_theme(&self, class: WindowClass) -> Option<WindowTheme> {
        self.current_theme()
            .entry(class)
            .copied()
            .or_else(|| descriptor_for_class(class).map(|desc| desc.default_theme))
    }

    /// Copies the class colours into `window` and marks it transparent.
    /// Windows without an entry or a descriptor are left untouched.
    pub fn update_colour_scheme(&self, window: &mut Window) {
        let Some(theme) = self.window_theme(window.class) else {
            return;
        };
        window.colours = theme.colours;
        window.flags.insert(WindowFlags::TRANSPARENT);
    }

    pub fn update_all_colour_schemes(&self, windows: &mut WindowManager) {
        windows.visit_each(|window, _| self.update_colour_scheme(window));
        windows.invalidate_all();
    }

    /// Recolours and redraws only the windows of `class`.
    pub fn update_class_colour_schemes(&self, class: WindowClass, windows: &mut WindowManager) {
        windows.visit_each(|window, _| {
            if window.class == class {
                self.update_colour_scheme(window);
            }
        });
        windows.invalidate_by_class(class);
    }

    fn editable_theme(&mut self) -> ThemeResult<&mut Theme> {
        match &mut self.current {
            ActiveTheme::Predefined(theme) => Err(ThemeError::ReadOnly(theme.name.clone())),
            ActiveTheme::Owned(theme) => Ok(theme.as_mut()),
        }
    }

    /// Sets one colour of `class`. Only the slots the class descriptor
    /// declares are accepted, since no others are written to the file.
    pub fn set_colour(
        &mut self,
        class: WindowClass,
        slot: usize,
        colour: ColourWithFlags,
    ) -> ThemeResult<()> {
        let desc = descriptor_for_class(class).ok_or(ThemeError::UnknownDescriptor(class))?;
        if slot >= usize::from(desc.num_colours) {
            return Err(ThemeError::SlotOutOfRange { class, slot });
        }
        let mut window_theme = self.window_theme(class).unwrap_or(desc.default_theme);
        window_theme.colours[slot] = colour;

        self.editable_theme()?.set_entry(class, window_theme);
        self.autosave();
        Ok(())
    }

    /// Replaces the theme flags. The predefined flag cannot be set this way.
    pub fn set_flags(&mut self, flags: ThemeFlags) -> ThemeResult<()> {
        self.editable_theme()?.flags = flags - ThemeFlags::PREDEFINED;
        self.autosave();
        Ok(())
    }

    /// Writes the current theme to its file; failures are logged only.
    fn autosave(&self) {
        let Some(path) = self.current_path.as_deref() else {
            log::warn!("Current theme has no file; not saving");
            return;
        };
        if let Err(e) = self.loader.ensure_directory() {
            log::error!("Unable to create themes directory: {e}");
        }
        if let Err(e) = self.loader.save(self.current_theme(), path) {
            log::error!("Autosave of theme '{}' failed: {}", path.display(), e);
        }
    }

    fn name_validator(&self, skip: Option<usize>) -> ThemeNameValidator {
        ThemeNameValidator::new(
            self.available
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != skip)
                .map(|(_, theme)| theme.display_name.clone()),
        )
    }

    /// Renames the current theme and its file.
    ///
    /// The stored preset becomes the name at index 1 rather than the renamed
    /// theme's own name.
    pub fn rename(&mut self, name: &str) -> ThemeResult<()> {
        self.editable_theme()?;
        self.name_validator(self.active_index).validate(name)?;
        let old_path = self.current_path.clone().ok_or(ThemeError::NoCurrentPath)?;

        self.loader.ensure_directory()?;
        let new_path = self.loader.path_for_name(name);
        if !same_file_name(&old_path, &new_path) {
            ensure_unused(&new_path, name)?;
        }
        self.loader.rename(&old_path, &new_path)?;
        self.current_path = Some(new_path.clone());

        self.editable_theme()?.name = name.to_string();
        self.loader.save(self.current_theme(), &new_path)?;

        self.load_available_themes();
        if let Some(index) = self.index_for_path(&new_path) {
            self.active_index = Some(index);
            self.store_preset(VANILLA_INDEX);
        }
        log::info!("Renamed theme to '{name}'");
        Ok(())
    }

    /// Saves a copy of the current theme under `name` and activates the copy.
    pub fn duplicate(&mut self, name: &str, windows: &mut WindowManager) -> ThemeResult<()> {
        self.name_validator(None).validate(name)?;

        self.loader.ensure_directory()?;
        let new_path = self.loader.path_for_name(name);
        ensure_unused(&new_path, name)?;

        let mut copy = self.current_theme().clone();
        copy.name = name.to_string();
        copy.flags.remove(ThemeFlags::PREDEFINED);
        self.loader.save(&copy, &new_path)?;

        self.load_theme_file(&new_path, windows);
        self.load_available_themes();
        if let Some(index) = self.index_for_path(&new_path) {
            self.active_index = Some(index);
            self.store_preset(index);
        }
        log::info!("Duplicated theme as '{name}'");
        Ok(())
    }

    /// Deletes the current theme's file and switches to vanilla.
    pub fn delete(&mut self, windows: &mut WindowManager) -> ThemeResult<()> {
        self.editable_theme()?;
        let path = self.current_path.clone().ok_or(ThemeError::NoCurrentPath)?;

        if let Err(e) = self.loader.remove(&path) {
            log::warn!("Failed to delete theme file: {e}");
        }
        self.load_predefined(vanilla(), windows);
        self.active_index = Some(VANILLA_INDEX);
        self.store_preset(VANILLA_INDEX);
        self.load_available_themes();
        self.update_all_colour_schemes(windows);
        log::info!("Deleted theme '{}'", path.display());
        Ok(())
    }

    fn index_for_path(&self, path: &Path) -> Option<usize> {
        self.available
            .iter()
            .position(|theme| theme.path.as_deref() == Some(path))
    }
}

/// Rejects `path` when a file is already there, listed or not.
fn ensure_unused(path: &Path, name: &str) -> ThemeResult<()> {
    if path.exists() {
        return Err(ThemeNameError::Duplicate {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

fn same_file_name(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}
