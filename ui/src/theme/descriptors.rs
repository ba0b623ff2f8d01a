//! Static table of themeable window classes.
//!
//! Each descriptor carries the JSON key used in theme files, the display-name
//! string, the colours the window uses when the active theme has no entry for
//! it, and how many of the six slots the window actually reads.

use crate::theme::types::WindowTheme;
use windowing::Colour::*;
use windowing::{Colour, ColourWithFlags, StringId, WindowClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowThemeDescriptor {
    pub class: WindowClass,
    pub key: &'static str,
    pub name: StringId,
    pub default_theme: WindowTheme,
    pub num_colours: u8,
}

impl WindowThemeDescriptor {
    const fn new(
        class: WindowClass,
        key: &'static str,
        name: u16,
        slots: &[ColourWithFlags],
    ) -> Self {
        Self {
            class,
            key,
            name: StringId(name),
            default_theme: WindowTheme::from_slots(slots),
            num_colours: slots.len() as u8,
        }
    }
}

pub(crate) const fn opaque(colour: Colour) -> ColourWithFlags {
    ColourWithFlags::new(colour)
}

pub(crate) const fn translucent(colour: Colour) -> ColourWithFlags {
    ColourWithFlags::translucent(colour)
}

macro_rules! descriptor {
    ($class:ident, $key:literal, $name:literal, [$($slot:expr),+ $(,)?]) => {
        WindowThemeDescriptor::new(WindowClass::$class, $key, $name, &[$($slot),+])
    };
}

#[rustfmt::skip]
pub static WINDOW_THEME_DESCRIPTORS: [WindowThemeDescriptor; 60] = [
    descriptor!(TopToolbar, "WC_TOP_TOOLBAR", 5245, [opaque(LightBlue), opaque(DarkGreen), opaque(DarkBrown), opaque(Grey)]),
    descriptor!(BottomToolbar, "WC_BOTTOM_TOOLBAR", 5246, [translucent(DarkGreen), translucent(DarkGreen), opaque(Black), opaque(BrightGreen)]),
    descriptor!(Ride, "WC_RIDE", 5247, [opaque(Grey), opaque(BordeauxRed), opaque(Grey)]),
    descriptor!(RideConstruction, "WC_RIDE_CONSTRUCTION", 5248, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(RideList, "WC_RIDE_LIST", 5249, [opaque(Grey), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(SavePrompt, "WC_SAVE_PROMPT", 5250, [translucent(BordeauxRed)]),
    descriptor!(ConstructRide, "WC_CONSTRUCT_RIDE", 5251, [opaque(DarkBrown), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(DemolishRidePrompt, "WC_DEMOLISH_RIDE_PROMPT", 5252, [translucent(BordeauxRed)]),
    descriptor!(Scenery, "WC_SCENERY", 5253, [opaque(DarkBrown), opaque(DarkGreen), opaque(DarkGreen)]),
    descriptor!(Options, "WC_OPTIONS", 5254, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(Footpath, "WC_FOOTPATH", 5255, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Land, "WC_LAND", 5256, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Water, "WC_WATER", 5257, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Peep, "WC_PEEP", 5258, [opaque(Grey), opaque(OliveGreen), opaque(OliveGreen)]),
    descriptor!(GuestList, "WC_GUEST_LIST", 5259, [opaque(Grey), opaque(OliveGreen), opaque(OliveGreen)]),
    descriptor!(StaffList, "WC_STAFF_LIST", 5260, [opaque(Grey), opaque(LightPurple), opaque(LightPurple)]),
    descriptor!(FirePrompt, "WC_FIRE_PROMPT", 5261, [translucent(BordeauxRed)]),
    descriptor!(ParkInformation, "WC_PARK_INFORMATION", 5262, [opaque(Grey), opaque(DarkYellow), opaque(DarkYellow)]),
    descriptor!(Finances, "WC_FINANCES", 5263, [opaque(Grey), opaque(DarkYellow), opaque(DarkYellow)]),
    descriptor!(TitleMenu, "WC_TITLE_MENU", 5264, [translucent(DarkGreen), translucent(DarkGreen), translucent(DarkGreen)]),
    descriptor!(TitleExit, "WC_TITLE_EXIT", 5265, [translucent(DarkGreen), translucent(DarkGreen), translucent(DarkGreen)]),
    descriptor!(RecentNews, "WC_RECENT_NEWS", 5266, [opaque(Grey), opaque(Grey), opaque(Black)]),
    descriptor!(ScenarioSelect, "WC_SCENARIO_SELECT", 5267, [opaque(Grey), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(TrackDesignList, "WC_TRACK_DESIGN_LIST", 5268, [opaque(BordeauxRed), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(TrackDesignPlace, "WC_TRACK_DESIGN_PLACE", 5269, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(NewCampaign, "WC_NEW_CAMPAIGN", 5270, [opaque(DarkYellow), opaque(DarkYellow), opaque(DarkYellow)]),
    descriptor!(KeyboardShortcutList, "WC_KEYBOARD_SHORTCUT_LIST", 5271, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(ChangeKeyboardShortcut, "WC_CHANGE_KEYBOARD_SHORTCUT", 5272, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(Map, "WC_MAP", 5273, [opaque(DarkGreen), opaque(DarkBrown)]),
    descriptor!(Banner, "WC_BANNER", 5274, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(EditorObjectSelection, "WC_EDITOR_OBJECT_SELECTION", 5275, [opaque(LightPurple), opaque(Grey), opaque(Grey)]),
    descriptor!(EditorInventionList, "WC_EDITOR_INVENTION_LIST", 5276, [opaque(LightPurple), opaque(Grey), opaque(Grey)]),
    descriptor!(EditorScenarioOptions, "WC_EDITOR_SCENARIO_OPTIONS", 5277, [opaque(LightPurple), opaque(Grey), opaque(Grey)]),
    descriptor!(EditorObjectiveOptions, "WC_EDTIOR_OBJECTIVE_OPTIONS", 5278, [opaque(LightPurple), opaque(Grey), opaque(Grey)]),
    descriptor!(ManageTrackDesign, "WC_MANAGE_TRACK_DESIGN", 5279, [opaque(Grey), opaque(Grey), opaque(Grey)]),
    descriptor!(TrackDeletePrompt, "WC_TRACK_DELETE_PROMPT", 5280, [opaque(BordeauxRed), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(InstallTrack, "WC_INSTALL_TRACK", 5281, [opaque(BordeauxRed), opaque(BordeauxRed), opaque(BordeauxRed)]),
    descriptor!(ClearScenery, "WC_CLEAR_SCENERY", 5282, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Cheats, "WC_CHEATS", 5283, [opaque(Grey), opaque(DarkYellow)]),
    descriptor!(Research, "WC_RESEARCH", 5284, [opaque(Grey), opaque(DarkYellow), opaque(DarkYellow)]),
    descriptor!(Viewport, "WC_VIEWPORT", 5285, [opaque(DarkBrown), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Mapgen, "WC_MAPGEN", 5286, [opaque(DarkGreen), opaque(DarkBrown), opaque(DarkBrown)]),
    descriptor!(Loadsave, "WC_LOADSAVE", 5287, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(LoadsaveOverwritePrompt, "WC_LOADSAVE_OVERWRITE_PROMPT", 5288, [translucent(BordeauxRed)]),
    descriptor!(TitleOptions, "WC_TITLE_OPTIONS", 5289, [translucent(DarkGreen), translucent(DarkGreen), translucent(DarkGreen)]),
    descriptor!(LandRights, "WC_LAND_RIGHTS", 5290, [opaque(DarkYellow), opaque(DarkYellow), opaque(DarkYellow)]),
    descriptor!(Themes, "WC_THEMES", 5291, [opaque(Grey), opaque(DarkGreen), opaque(DarkGreen)]),
    descriptor!(Staff, "WC_STAFF", 5292, [opaque(Grey), opaque(LightPurple), opaque(LightPurple)]),
    descriptor!(EditorTrackBottomToolbar, "WC_EDITOR_TRACK_BOTTOM_TOOLBAR", 5293, [translucent(LightBlue), translucent(LightBlue), translucent(LightBlue)]),
    descriptor!(EditorScenarioBottomToolbar, "WC_EDITOR_SCENARIO_BOTTOM_TOOLBAR", 5294, [translucent(LightBrown), translucent(LightBrown), translucent(MossGreen)]),
    descriptor!(TitleEditor, "WC_TITLE_EDITOR", 5295, [opaque(Grey), opaque(OliveGreen), opaque(OliveGreen)]),
    descriptor!(TileInspector, "WC_TILE_INSPECTOR", 5296, [opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(ViewClipping, "WC_VIEW_CLIPPING", 5297, [opaque(DarkGreen)]),
    descriptor!(Changelog, "WC_CHANGELOG", 5298, [opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(Multiplayer, "WC_MULTIPLAYER", 5299, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(Player, "WC_PLAYER", 5300, [opaque(LightBlue), opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(NetworkStatus, "WC_NETWORK_STATUS", 5301, [opaque(LightBlue)]),
    descriptor!(ServerList, "WC_SERVER_LIST", 5302, [opaque(LightBlue), opaque(LightBlue)]),
    descriptor!(Chat, "WC_CHAT", 5303, [translucent(Grey)]),
    descriptor!(Console, "WC_CONSOLE", 5304, [translucent(LightBlue), opaque(White)]),
];

pub fn descriptors() -> &'static [WindowThemeDescriptor] {
    &WINDOW_THEME_DESCRIPTORS
}

pub fn descriptor_for_class(class: WindowClass) -> Option<&'static WindowThemeDescriptor> {
    WINDOW_THEME_DESCRIPTORS.iter().find(|desc| desc.class == class)
}

pub fn descriptor_for_key(key: &str) -> Option<&'static WindowThemeDescriptor> {
    WINDOW_THEME_DESCRIPTORS.iter().find(|desc| desc.key == key)
}

/// Number of colour slots the class reads, or 0 for classes without a descriptor.
pub fn desc_num_colours(class: WindowClass) -> u8 {
    descriptor_for_class(class).map_or(0, |desc| desc.num_colours)
}

pub fn desc_name(class: WindowClass) -> StringId {
    descriptor_for_class(class).map_or(StringId::NONE, |desc| desc.name)
}
