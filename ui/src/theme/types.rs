use bitflags::bitflags;
use windowing::window::WINDOW_COLOUR_COUNT;
use windowing::{ColourWithFlags, WindowClass};

bitflags! {
    /// Theme-wide switches stored alongside the per-class colour entries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ThemeFlags: u8 {
        /// Built-in theme; never written to disk and never mutated.
        const PREDEFINED = 1 << 0;
        const USE_LIGHTS_RIDE = 1 << 1;
        const USE_LIGHTS_PARK = 1 << 2;
        const USE_ALTERNATIVE_SCENARIO_SELECT_FONT = 1 << 3;
        const USE_FULL_BOTTOM_TOOLBAR = 1 << 4;
        const USE_3D_IMAGE_BUTTONS = 1 << 5;
    }
}

impl ThemeFlags {
    /// Parses the flag names used by the command line (`lights-ride`, ...).
    /// `predefined` is deliberately not accepted.
    pub fn from_cli_name(name: &str) -> Option<ThemeFlags> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "lights-ride" => Some(ThemeFlags::USE_LIGHTS_RIDE),
            "lights-park" => Some(ThemeFlags::USE_LIGHTS_PARK),
            "alt-scenario-select-font" => Some(ThemeFlags::USE_ALTERNATIVE_SCENARIO_SELECT_FONT),
            "full-bottom-toolbar" => Some(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR),
            "3d-image-buttons" => Some(ThemeFlags::USE_3D_IMAGE_BUTTONS),
            _ => None,
        }
    }
}

/// The six colour slots of one window class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowTheme {
    pub colours: [ColourWithFlags; WINDOW_COLOUR_COUNT],
}

impl WindowTheme {
    /// Builds a theme from up to six slots; missing slots are black.
    pub const fn from_slots(slots: &[ColourWithFlags]) -> Self {
        let mut colours = [ColourWithFlags::new(windowing::Colour::Black); WINDOW_COLOUR_COUNT];
        let mut i = 0;
        while i < slots.len() && i < WINDOW_COLOUR_COUNT {
            colours[i] = slots[i];
            i += 1;
        }
        Self { colours }
    }
}

/// Colour override for a single window class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEntry {
    pub class: WindowClass,
    pub theme: WindowTheme,
}

/// A named colour scheme: per-class overrides plus feature flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    entries: Vec<ThemeEntry>,
    pub flags: ThemeFlags,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            flags: ThemeFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: ThemeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_entry(mut self, class: WindowClass, theme: WindowTheme) -> Self {
        self.set_entry(class, theme);
        self
    }

    pub fn is_predefined(&self) -> bool {
        self.flags.contains(ThemeFlags::PREDEFINED)
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn entry(&self, class: WindowClass) -> Option<&WindowTheme> {
        self.entries
            .iter()
            .find(|entry| entry.class == class)
            .map(|entry| &entry.theme)
    }

    /// Replaces the entry for `class` in place, or appends a new one.
    pub fn set_entry(&mut self, class: WindowClass, theme: WindowTheme) {
        match self.entries.iter_mut().find(|entry| entry.class == class) {
            Some(existing) => existing.theme = theme,
            None => self.entries.push(ThemeEntry { class, theme }),
        }
    }

    pub fn remove_entry(&mut self, class: WindowClass) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.class != class);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use windowing::Colour;

    #[test]
    fn test_from_slots_pads_with_black() {
        let theme = WindowTheme::from_slots(&[ColourWithFlags::new(Colour::Grey)]);
        assert_eq!(theme.colours[0].colour, Colour::Grey);
        assert!(theme.colours[1..].iter().all(|c| c.colour == Colour::Black));
    }

    #[test]
    fn test_set_entry_replaces_in_place() {
        let mut theme = Theme::new("Test")
            .with_entry(WindowClass::Ride, WindowTheme::default())
            .with_entry(WindowClass::Map, WindowTheme::default());

        let grey = WindowTheme::from_slots(&[ColourWithFlags::new(Colour::Grey)]);
        theme.set_entry(WindowClass::Ride, grey);

        assert_eq!(theme.entries().len(), 2);
        assert_eq!(theme.entries()[0].class, WindowClass::Ride);
        assert_eq!(theme.entry(WindowClass::Ride), Some(&grey));
    }

    #[test]
    fn test_remove_entry() {
        let mut theme = Theme::new("Test").with_entry(WindowClass::Ride, WindowTheme::default());
        assert!(theme.remove_entry(WindowClass::Ride));
        assert!(!theme.remove_entry(WindowClass::Ride));
        assert_none!(theme.entry(WindowClass::Ride));
    }

    #[test]
    fn test_cli_flag_names() {
        assert_some_eq!(
            ThemeFlags::from_cli_name("lights-ride"),
            ThemeFlags::USE_LIGHTS_RIDE
        );
        assert_some_eq!(
            ThemeFlags::from_cli_name("FULL_BOTTOM_TOOLBAR"),
            ThemeFlags::USE_FULL_BOTTOM_TOOLBAR
        );
        assert_none!(ThemeFlags::from_cli_name("predefined"));
    }
}
