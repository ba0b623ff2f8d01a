//! Built-in themes. They live for the whole program and are never written to
//! disk; the theme manager refers to them by `&'static` reference.

use crate::theme::descriptors::{opaque, translucent};
use crate::theme::types::{Theme, ThemeFlags, WindowTheme};
use once_cell::sync::Lazy;
use windowing::Colour::*;
use windowing::{Colour, WindowClass};

/// Index of the vanilla theme in the available-theme list.
pub const VANILLA_INDEX: usize = 1;

pub const RCT1_CONFIG_NAME: &str = "*RCT1";
pub const RCT2_CONFIG_NAME: &str = "*RCT2";

pub struct PredefinedTheme {
    pub theme: &'static Theme,
    /// Localised title shown in theme lists.
    pub title: &'static str,
}

fn slots3(a: Colour, b: Colour, c: Colour) -> WindowTheme {
    WindowTheme::from_slots(&[opaque(a), opaque(b), opaque(c)])
}

fn translucent_grey3() -> WindowTheme {
    WindowTheme::from_slots(&[translucent(Grey), translucent(Grey), translucent(Grey)])
}

pub static RCT1_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new(RCT1_CONFIG_NAME)
        .with_flags(
            ThemeFlags::PREDEFINED
                | ThemeFlags::USE_LIGHTS_RIDE
                | ThemeFlags::USE_LIGHTS_PARK
                | ThemeFlags::USE_ALTERNATIVE_SCENARIO_SELECT_FONT
                | ThemeFlags::USE_FULL_BOTTOM_TOOLBAR,
        )
        .with_entry(
            WindowClass::TopToolbar,
            WindowTheme::from_slots(&[opaque(Grey), opaque(Grey), opaque(Grey), opaque(Grey)]),
        )
        .with_entry(
            WindowClass::BottomToolbar,
            WindowTheme::from_slots(&[
                translucent(Grey),
                translucent(Grey),
                opaque(Black),
                opaque(Yellow),
            ]),
        )
        .with_entry(WindowClass::Ride, slots3(BordeauxRed, Grey, SaturatedGreen))
        .with_entry(WindowClass::RideList, slots3(BordeauxRed, Grey, Grey))
        .with_entry(WindowClass::ConstructRide, slots3(BordeauxRed, Grey, Grey))
        .with_entry(WindowClass::Peep, slots3(LightBrown, BordeauxRed, BordeauxRed))
        .with_entry(WindowClass::GuestList, slots3(LightBrown, BordeauxRed, BordeauxRed))
        .with_entry(WindowClass::StaffList, slots3(DarkGreen, LightPurple, LightPurple))
        .with_entry(WindowClass::Finances, slots3(LightPurple, Grey, Grey))
        .with_entry(WindowClass::TitleMenu, translucent_grey3())
        .with_entry(WindowClass::TitleExit, translucent_grey3())
        .with_entry(WindowClass::NewCampaign, slots3(LightPurple, LightPurple, Grey))
        .with_entry(WindowClass::TitleOptions, translucent_grey3())
        .with_entry(WindowClass::Staff, slots3(DarkGreen, LightPurple, LightPurple))
        .with_entry(WindowClass::Options, slots3(DarkBrown, DarkBrown, DarkBrown))
        .with_entry(
            WindowClass::KeyboardShortcutList,
            slots3(DarkBrown, DarkBrown, DarkBrown),
        )
        .with_entry(
            WindowClass::ChangeKeyboardShortcut,
            slots3(DarkBrown, DarkBrown, DarkBrown),
        )
});

pub static RCT2_THEME: Lazy<Theme> =
    Lazy::new(|| Theme::new(RCT2_CONFIG_NAME).with_flags(ThemeFlags::PREDEFINED));

static PREDEFINED_THEMES: Lazy<[PredefinedTheme; 2]> = Lazy::new(|| {
    [
        PredefinedTheme {
            theme: &RCT1_THEME,
            title: "RollerCoaster Tycoon 1",
        },
        PredefinedTheme {
            theme: &RCT2_THEME,
            title: "RollerCoaster Tycoon 2",
        },
    ]
});

/// Predefined themes in their fixed list order.
pub fn predefined_themes() -> &'static [PredefinedTheme] {
    PREDEFINED_THEMES.as_slice()
}

pub fn vanilla() -> &'static Theme {
    &RCT2_THEME
}
