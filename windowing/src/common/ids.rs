use serde::{Deserialize, Serialize};
use std::fmt;

/// Index into a window's widget list.
pub type WidgetIndex = usize;

/// Instance number distinguishing windows of the same class.
pub type WindowNumber = u32;

/// Category of window. Themes assign colours per class, and the registry
/// finds windows by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowClass {
    MainWindow,
    TopToolbar,
    BottomToolbar,
    Tooltip,
    Dropdown,
    TextInput,
    Error,
    Ride,
    RideConstruction,
    RideList,
    SavePrompt,
    ConstructRide,
    DemolishRidePrompt,
    Scenery,
    Options,
    Footpath,
    Land,
    Water,
    Peep,
    GuestList,
    StaffList,
    FirePrompt,
    ParkInformation,
    Finances,
    TitleMenu,
    TitleExit,
    RecentNews,
    ScenarioSelect,
    TrackDesignList,
    TrackDesignPlace,
    NewCampaign,
    KeyboardShortcutList,
    ChangeKeyboardShortcut,
    Map,
    Banner,
    EditorObjectSelection,
    EditorInventionList,
    EditorScenarioOptions,
    EditorObjectiveOptions,
    ManageTrackDesign,
    TrackDeletePrompt,
    InstallTrack,
    ClearScenery,
    Cheats,
    Research,
    Viewport,
    Mapgen,
    Loadsave,
    LoadsaveOverwritePrompt,
    TitleOptions,
    LandRights,
    Themes,
    Staff,
    EditorTrackBottomToolbar,
    EditorScenarioBottomToolbar,
    TitleEditor,
    TileInspector,
    ViewClipping,
    Changelog,
    Multiplayer,
    Player,
    NetworkStatus,
    ServerList,
    Chat,
    Console,
}

/// A window is uniquely identified by its class and instance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowIdentity {
    pub class: WindowClass,
    pub number: WindowNumber,
}

impl WindowIdentity {
    pub const fn new(class: WindowClass, number: WindowNumber) -> Self {
        Self { class, number }
    }
}

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.class, self.number)
    }
}

/// Identifier into the localised string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StringId(pub u16);

impl StringId {
    pub const NONE: StringId = StringId(u16::MAX);
    pub const NUMERIC_UP: StringId = StringId(1860);
    pub const NUMERIC_DOWN: StringId = StringId(1861);
    pub const INCREASE: StringId = StringId(2960);
    pub const DECREASE: StringId = StringId(2961);

    pub const fn is_none(self) -> bool {
        self.0 == u16::MAX
    }
}

/// Identifier of a sprite in the image table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    pub const NONE: ImageId = ImageId(u32::MAX);
    pub const LAND_TOOL_DECREASE: ImageId = ImageId(5144);
    pub const LAND_TOOL_INCREASE: ImageId = ImageId(5145);
}
