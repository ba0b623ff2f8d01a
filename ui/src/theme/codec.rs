//! JSON form of a theme.
//!
//! ```json
//! {
//!   "name": "Dusk",
//!   "version": 1,
//!   "entries": {
//!     "WC_TOP_TOOLBAR": { "colours": [ { "colour": "light_blue", "translucent": false } ] }
//!   },
//!   "useLightsRide": false,
//!   "useLightsPark": false,
//!   "useAltScenarioSelectFont": false,
//!   "useFullBottomToolbar": false,
//!   "use3dImageButtons": false
//! }
//! ```
//!
//! Documents without a `version` (or with version 0) store each slot as a
//! single legacy colour byte.

use crate::theme::descriptors::{WindowThemeDescriptor, descriptor_for_class, descriptor_for_key};
use crate::theme::error::{ThemeError, ThemeResult};
use crate::theme::types::{Theme, ThemeFlags, WindowTheme};
use serde_json::{Map, Value, json};
use windowing::{Colour, ColourWithFlags};

pub const THEME_FORMAT_VERSION: u64 = 1;

const FLAG_KEYS: [(&str, ThemeFlags); 5] = [
    ("useLightsRide", ThemeFlags::USE_LIGHTS_RIDE),
    ("useLightsPark", ThemeFlags::USE_LIGHTS_PARK),
    (
        "useAltScenarioSelectFont",
        ThemeFlags::USE_ALTERNATIVE_SCENARIO_SELECT_FONT,
    ),
    ("useFullBottomToolbar", ThemeFlags::USE_FULL_BOTTOM_TOOLBAR),
    ("use3dImageButtons", ThemeFlags::USE_3D_IMAGE_BUTTONS),
];

pub fn colour_slot_to_json(slot: ColourWithFlags) -> Value {
    json!({
        "colour": slot.colour.name(),
        "translucent": slot.is_translucent(),
    })
}

/// Reads one slot. Returns `None` when the slot cannot be understood, in
/// which case the caller keeps the descriptor default.
pub fn colour_slot_from_json(value: &Value, version: u64) -> Option<ColourWithFlags> {
    if version == 0 {
        return value
            .as_u64()
            .map(|byte| ColourWithFlags::from_legacy((byte & 0xFF) as u8));
    }

    let object = value.as_object()?;
    let name = object.get("colour").and_then(Value::as_str)?;
    let colour = Colour::from_name(name)?;
    let translucent = object
        .get("translucent")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut slot = ColourWithFlags::new(colour);
    slot.set_translucent(translucent);
    Some(slot)
}

fn window_theme_to_json(desc: &WindowThemeDescriptor, theme: &WindowTheme) -> Value {
    let colours: Vec<Value> = theme
        .colours
        .iter()
        .take(desc.num_colours as usize)
        .copied()
        .map(colour_slot_to_json)
        .collect();
    json!({ "colours": colours })
}

fn window_theme_from_json(
    desc: &WindowThemeDescriptor,
    value: &Value,
    version: u64,
) -> ThemeResult<WindowTheme> {
    let colours = value
        .get("colours")
        .and_then(Value::as_array)
        .filter(|colours| !colours.is_empty())
        .ok_or_else(|| ThemeError::Malformed(format!("entry '{}' has no colours", desc.key)))?;

    let mut theme = desc.default_theme;
    let count = colours.len().min(desc.num_colours as usize);
    for (index, slot) in colours.iter().take(count).enumerate() {
        match colour_slot_from_json(slot, version) {
            Some(colour) => theme.colours[index] = colour,
            None => log::warn!(
                "Unrecognised colour {} in slot {} of '{}', keeping default",
                slot,
                index,
                desc.key
            ),
        }
    }
    Ok(theme)
}

/// Serialises a theme. Fails if any entry's class has no descriptor.
pub fn to_json(theme: &Theme) -> ThemeResult<Value> {
    let mut entries = Map::new();
    for entry in theme.entries() {
        let desc =
            descriptor_for_class(entry.class).ok_or(ThemeError::UnknownDescriptor(entry.class))?;
        entries.insert(desc.key.to_string(), window_theme_to_json(desc, &entry.theme));
    }

    let mut document = Map::new();
    document.insert("name".into(), Value::String(theme.name.clone()));
    document.insert("version".into(), json!(THEME_FORMAT_VERSION));
    document.insert("entries".into(), Value::Object(entries));
    for (key, flag) in FLAG_KEYS {
        document.insert(key.into(), Value::Bool(theme.flags.contains(flag)));
    }
    Ok(Value::Object(document))
}

pub fn from_json(document: &Value) -> ThemeResult<Theme> {
    let object = document
        .as_object()
        .ok_or_else(|| ThemeError::Malformed("document is not an object".into()))?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ThemeError::Malformed("missing theme name".into()))?;
    let version = object.get("version").and_then(Value::as_u64).unwrap_or(0);

    let mut theme = Theme::new(name);
    if let Some(entries) = object.get("entries").and_then(Value::as_object) {
        for (key, value) in entries {
            let Some(desc) = descriptor_for_key(key) else {
                log::debug!("Skipping unknown window class '{key}'");
                continue;
            };
            let window_theme = window_theme_from_json(desc, value, version)?;
            theme.set_entry(desc.class, window_theme);
        }
    }

    for (key, flag) in FLAG_KEYS {
        if object.get(key).and_then(Value::as_bool).unwrap_or(false) {
            theme.flags.insert(flag);
        }
    }
    Ok(theme)
}

pub fn to_string_pretty(theme: &Theme) -> ThemeResult<String> {
    let document = to_json(theme)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn from_str(text: &str) -> ThemeResult<Theme> {
    let document: Value = serde_json::from_str(text)?;
    from_json(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::predefined::RCT1_THEME;
    use claims::*;
    use windowing::WindowClass;

    #[test]
    fn test_round_trip_keeps_entries_and_flags() {
        let mut theme = RCT1_THEME.clone();
        theme.name = "Copy".into();
        theme.flags.remove(ThemeFlags::PREDEFINED);

        let restored = assert_ok!(from_json(&assert_ok!(to_json(&theme))));
        assert_eq!(restored, theme);
    }

    #[test]
    fn test_only_declared_slots_are_written() {
        let theme = Theme::new("Slots").with_entry(WindowClass::Map, WindowTheme::default());
        let document = assert_ok!(to_json(&theme));
        let colours = document["entries"]["WC_MAP"]["colours"].as_array().cloned();
        assert_eq!(colours.map(|c| c.len()), Some(2));
        assert_eq!(document["version"], json!(1));
    }

    #[test]
    fn test_class_without_descriptor_is_rejected() {
        let theme = Theme::new("Bad").with_entry(WindowClass::Tooltip, WindowTheme::default());
        assert_matches!(
            to_json(&theme),
            Err(ThemeError::UnknownDescriptor(WindowClass::Tooltip))
        );
    }

    #[test]
    fn test_legacy_document_decodes_bytes() {
        let document = json!({
            "name": "Old",
            "entries": { "WC_RIDE": { "colours": [0x9A, 1] } },
        });
        let theme = assert_ok!(from_json(&document));
        let ride = assert_some!(theme.entry(WindowClass::Ride));
        assert_eq!(ride.colours[0].colour, Colour::BordeauxRed);
        assert!(ride.colours[0].is_translucent());
        assert_eq!(ride.colours[1].colour, Colour::Grey);
        // Third slot was not present and keeps the descriptor default.
        assert_eq!(ride.colours[2].colour, Colour::Grey);
    }

    #[test]
    fn test_unknown_colour_name_keeps_default() {
        let document = json!({
            "name": "Typo",
            "version": 1,
            "entries": { "WC_RIDE": { "colours": [
                { "colour": "mauve", "translucent": true },
                { "colour": "WHITE", "translucent": false }
            ] } },
        });
        let theme = assert_ok!(from_json(&document));
        let ride = assert_some!(theme.entry(WindowClass::Ride));
        assert_eq!(ride.colours[0], ColourWithFlags::new(Colour::Grey));
        assert_eq!(ride.colours[1].colour, Colour::White);
    }

    #[test]
    fn test_extra_slots_are_ignored() {
        let slots: Vec<Value> = (0..6)
            .map(|_| json!({ "colour": "teal", "translucent": false }))
            .collect();
        let document = json!({
            "name": "Wide",
            "version": 1,
            "entries": { "WC_VIEW_CLIPPING": { "colours": slots } },
        });
        let theme = assert_ok!(from_json(&document));
        let clipping = assert_some!(theme.entry(WindowClass::ViewClipping));
        assert_eq!(clipping.colours[0].colour, Colour::Teal);
        assert_eq!(clipping.colours[1].colour, Colour::Black);
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let document = json!({
            "name": "Future",
            "version": 1,
            "entries": { "WC_HOLOGRAM": { "colours": [] } },
        });
        let theme = assert_ok!(from_json(&document));
        assert!(theme.entries().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        assert_matches!(from_json(&json!([1, 2])), Err(ThemeError::Malformed(_)));
        assert_matches!(
            from_json(&json!({ "version": 1 })),
            Err(ThemeError::Malformed(_))
        );
        assert_matches!(
            from_json(&json!({ "name": "X", "entries": { "WC_RIDE": {} } })),
            Err(ThemeError::Malformed(_))
        );
        assert_matches!(
            from_json(&json!({ "name": "X", "entries": { "WC_RIDE": { "colours": [] } } })),
            Err(ThemeError::Malformed(_))
        );
        assert_matches!(from_str("{ not json"), Err(ThemeError::Json(_)));
    }
}
