//! Palette colours and the per-slot colour flags used by window themes.
//!
//! A [`ColourWithFlags`] is what a window stores in each of its six colour
//! slots. Older theme files encode a slot as a single byte; see
//! [`ColourWithFlags::from_legacy`] for the bit layout.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 32 palette colours windows can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Colour {
    #[default]
    Black = 0,
    Grey,
    White,
    DarkPurple,
    LightPurple,
    BrightPurple,
    DarkBlue,
    LightBlue,
    IcyBlue,
    Teal,
    Aquamarine,
    SaturatedGreen,
    DarkGreen,
    MossGreen,
    BrightGreen,
    OliveGreen,
    DarkOliveGreen,
    BrightYellow,
    Yellow,
    DarkYellow,
    LightOrange,
    DarkOrange,
    LightBrown,
    SaturatedBrown,
    DarkBrown,
    SalmonPink,
    BordeauxRed,
    SaturatedRed,
    BrightRed,
    DarkPink,
    BrightPink,
    LightPink,
}

impl Colour {
    pub const COUNT: usize = 32;

    pub const ALL: [Colour; Colour::COUNT] = [
        Colour::Black,
        Colour::Grey,
        Colour::White,
        Colour::DarkPurple,
        Colour::LightPurple,
        Colour::BrightPurple,
        Colour::DarkBlue,
        Colour::LightBlue,
        Colour::IcyBlue,
        Colour::Teal,
        Colour::Aquamarine,
        Colour::SaturatedGreen,
        Colour::DarkGreen,
        Colour::MossGreen,
        Colour::BrightGreen,
        Colour::OliveGreen,
        Colour::DarkOliveGreen,
        Colour::BrightYellow,
        Colour::Yellow,
        Colour::DarkYellow,
        Colour::LightOrange,
        Colour::DarkOrange,
        Colour::LightBrown,
        Colour::SaturatedBrown,
        Colour::DarkBrown,
        Colour::SalmonPink,
        Colour::BordeauxRed,
        Colour::SaturatedRed,
        Colour::BrightRed,
        Colour::DarkPink,
        Colour::BrightPink,
        Colour::LightPink,
    ];

    const NAMES: [&'static str; Colour::COUNT] = [
        "black",
        "grey",
        "white",
        "dark_purple",
        "light_purple",
        "bright_purple",
        "dark_blue",
        "light_blue",
        "icy_blue",
        "teal",
        "aquamarine",
        "saturated_green",
        "dark_green",
        "moss_green",
        "bright_green",
        "olive_green",
        "dark_olive_green",
        "bright_yellow",
        "yellow",
        "dark_yellow",
        "light_orange",
        "dark_orange",
        "light_brown",
        "saturated_brown",
        "dark_brown",
        "salmon_pink",
        "bordeaux_red",
        "saturated_red",
        "bright_red",
        "dark_pink",
        "bright_pink",
        "light_pink",
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Colour> {
        Colour::ALL.get(index as usize).copied()
    }

    /// Stable name used in theme files.
    pub fn name(self) -> &'static str {
        Colour::NAMES[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Colour> {
        Colour::NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .and_then(|index| Colour::from_index(index as u8))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Styling flags attached to a colour slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ColourFlags: u8 {
        const TRANSLUCENT = 1 << 0;
        const WITH_OUTLINE = 1 << 1;
        const INSET = 1 << 2;
    }
}

/// One colour slot: a palette colour plus styling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColourWithFlags {
    pub colour: Colour,
    pub flags: ColourFlags,
}

impl ColourWithFlags {
    const LEGACY_COLOUR_MASK: u8 = 0x1F;
    const LEGACY_OUTLINE_BIT: u8 = 1 << 5;
    const LEGACY_INSET_BIT: u8 = 1 << 6;
    const LEGACY_TRANSLUCENT_BIT: u8 = 1 << 7;

    pub const fn new(colour: Colour) -> Self {
        Self {
            colour,
            flags: ColourFlags::empty(),
        }
    }

    pub const fn translucent(colour: Colour) -> Self {
        Self {
            colour,
            flags: ColourFlags::TRANSLUCENT,
        }
    }

    pub const fn with_flags(colour: Colour, flags: ColourFlags) -> Self {
        Self { colour, flags }
    }

    pub fn is_translucent(&self) -> bool {
        self.flags.contains(ColourFlags::TRANSLUCENT)
    }

    pub fn set_translucent(&mut self, translucent: bool) {
        self.flags.set(ColourFlags::TRANSLUCENT, translucent);
    }

    /// Decodes a legacy single-byte slot.
    ///
    /// Bits 0-4 select the palette colour, bit 5 is the outline flag, bit 6
    /// the inset flag and bit 7 the translucent flag. The mask covers all 32
    /// colours, so every byte decodes.
    pub fn from_legacy(byte: u8) -> Self {
        let colour = Colour::ALL[(byte & Self::LEGACY_COLOUR_MASK) as usize];
        let mut flags = ColourFlags::empty();
        flags.set(
            ColourFlags::WITH_OUTLINE,
            byte & Self::LEGACY_OUTLINE_BIT != 0,
        );
        flags.set(ColourFlags::INSET, byte & Self::LEGACY_INSET_BIT != 0);
        flags.set(
            ColourFlags::TRANSLUCENT,
            byte & Self::LEGACY_TRANSLUCENT_BIT != 0,
        );
        Self { colour, flags }
    }

    pub fn to_legacy(&self) -> u8 {
        let mut byte = self.colour.index();
        if self.flags.contains(ColourFlags::WITH_OUTLINE) {
            byte |= Self::LEGACY_OUTLINE_BIT;
        }
        if self.flags.contains(ColourFlags::INSET) {
            byte |= Self::LEGACY_INSET_BIT;
        }
        if self.flags.contains(ColourFlags::TRANSLUCENT) {
            byte |= Self::LEGACY_TRANSLUCENT_BIT;
        }
        byte
    }
}

impl From<Colour> for ColourWithFlags {
    fn from(colour: Colour) -> Self {
        ColourWithFlags::new(colour)
    }
}
