//! Style profile resolution: migration, per-device lookup and cross-device copy.
//!
//! Stored templates carry their styles in one of two shapes:
//!
//! - tiered: an object with `mobile`, `tablet` and `desktop` keys, each a
//!   (possibly partial) style set
//! - legacy: a single flat style set, or nothing at all
//!
//! [`migrate`] turns either shape into [`StyleProfiles`]. It never fails:
//! unknown keys are ignored and unusable values fall back to their defaults.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::{Device, StyleProfiles, StyleSet};

/// Legacy single text color, split into name and value colors in the
/// current schema.
const LEGACY_TEXT_COLOR: &str = "textColor";

/// Fields populated from [`LEGACY_TEXT_COLOR`] when they are absent.
const TEXT_COLOR_TARGETS: [&str; 2] = ["specNameTextColor", "specValueTextColor"];

/// Migrates a stored style value into the three-tier schema.
///
/// A value exposing all three device keys is taken as already tiered. Any
/// other value is a legacy flat style set: the legacy `textColor` fills both
/// text colors when they are absent, missing properties take their defaults,
/// and the result is copied to every device.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spectable::models::Color;
/// use spectable::services::style_profiles::migrate;
///
/// let profiles = migrate(&json!({"textColor": "#222222"}));
/// assert_eq!(profiles.mobile.spec_value_text_color, Color::rgb(0x22, 0x22, 0x22));
/// assert_eq!(profiles.mobile, profiles.desktop);
/// ```
#[must_use]
pub fn migrate(raw: &Value) -> StyleProfiles {
    if let Some(map) = raw.as_object() {
        if Device::ALL.iter().all(|device| map.contains_key(device.key())) {
            return StyleProfiles {
                mobile: style_set_from(&map[Device::Mobile.key()]),
                tablet: style_set_from(&map[Device::Tablet.key()]),
                desktop: style_set_from(&map[Device::Desktop.key()]),
            };
        }
    }

    debug!("Migrating legacy flat style profile to device tiers");

    let mut legacy = raw.as_object().cloned().unwrap_or_default();
    if let Some(text_color) = legacy.get(LEGACY_TEXT_COLOR).cloned() {
        for target in TEXT_COLOR_TARGETS {
            if !legacy.contains_key(target) {
                legacy.insert(target.to_string(), text_color.clone());
            }
        }
    }

    StyleProfiles::uniform(overlay_on_defaults(&legacy))
}

/// Returns the style set for a device.
#[must_use]
pub fn resolve(profiles: &StyleProfiles, device: Device) -> &StyleSet {
    profiles.get(device)
}

/// Resolves a device style from an unmigrated, tiered profile map.
///
/// Falls back to the `desktop` entry when the device key is absent, and to
/// the defaults when neither exists.
#[must_use]
pub fn resolve_raw(raw: &Map<String, Value>, device: Device) -> StyleSet {
    raw.get(device.key())
        .or_else(|| raw.get(Device::Desktop.key()))
        .map(style_set_from)
        .unwrap_or_default()
}

/// Copies one device's styling onto another.
///
/// Returns new profiles where `to` is a deep copy of `from`; the other
/// devices are unchanged. This overwrites `to` irreversibly, so callers are
/// expected to ask for confirmation first.
#[must_use]
pub fn copy(profiles: &StyleProfiles, from: Device, to: Device) -> StyleProfiles {
    let mut next = profiles.clone();
    *next.get_mut(to) = profiles.get(from).clone();
    next
}

fn style_set_from(value: &Value) -> StyleSet {
    match value.as_object() {
        Some(map) => overlay_on_defaults(map),
        None => StyleSet::default(),
    }
}

/// Overlays stored properties on the defaults, one property at a time.
///
/// A property is kept only if the set still deserializes with it, so one bad
/// value cannot discard the rest of the profile.
fn overlay_on_defaults(stored: &Map<String, Value>) -> StyleSet {
    let Ok(Value::Object(mut merged)) = serde_json::to_value(StyleSet::default()) else {
        return StyleSet::default();
    };

    for (key, value) in stored {
        if !merged.contains_key(key) {
            continue;
        }

        let previous = merged.insert(key.clone(), value.clone());
        if serde_json::from_value::<StyleSet>(Value::Object(merged.clone())).is_err() {
            warn!(field = %key, value = %value, "Discarding unusable style value");
            if let Some(previous) = previous {
                merged.insert(key.clone(), previous);
            }
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, TableAlignment};
    use serde_json::json;

    #[test]
    fn test_migrate_null_gives_defaults_everywhere() {
        let profiles = migrate(&Value::Null);
        assert_eq!(profiles, StyleProfiles::uniform(StyleSet::default()));
    }

    #[test]
    fn test_migrate_legacy_flat() {
        let raw = json!({
            "tableWidth": 80,
            "tableAlignment": "left",
            "rowStripingEnabled": true,
            "oddRowColor": "#fafafa"
        });
        let profiles = migrate(&raw);

        assert_eq!(profiles.desktop.table_width, 80);
        assert_eq!(profiles.desktop.table_alignment, TableAlignment::Left);
        assert!(profiles.desktop.row_striping_enabled);
        assert_eq!(profiles.desktop.odd_row_color, Color::rgb(0xfa, 0xfa, 0xfa));
        assert_eq!(profiles.mobile, profiles.desktop);
        assert_eq!(profiles.tablet, profiles.desktop);
    }

    #[test]
    fn test_text_color_alias_only_fills_absent_fields() {
        let raw = json!({
            "textColor": "#101010",
            "specValueTextColor": "#202020"
        });
        let style = migrate(&raw).desktop;

        assert_eq!(style.spec_name_text_color, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(style.spec_value_text_color, Color::rgb(0x20, 0x20, 0x20));
    }

    #[test]
    fn test_bad_values_fall_back_per_field() {
        let raw = json!({
            "tableWidth": "wide",
            "oddRowColor": "",
            "buttonFontSize": null,
            "evenRowColor": "#000000",
            "someRetiredField": 3
        });
        let style = migrate(&raw).desktop;
        let defaults = StyleSet::default();

        assert_eq!(style.table_width, defaults.table_width);
        assert_eq!(style.odd_row_color, defaults.odd_row_color);
        assert_eq!(style.button_font_size, defaults.button_font_size);
        assert_eq!(style.even_row_color, Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_legacy_values_outside_the_editor_forms_are_kept() {
        let raw = json!({
            "oddRowColor": "rgba(0, 0, 0, 0.05)",
            "textColor": "red",
            "tableWidth": "80",
            "tableBorderColor": "hsl(0 0% 90%)",
            "specNameFontWeight": "bold"
        });
        let profiles = migrate(&raw);

        for device in Device::ALL {
            let style = profiles.get(device);
            assert_eq!(style.odd_row_color, Color::Css("rgba(0, 0, 0, 0.05)".to_string()));
            assert_eq!(style.spec_name_text_color, Color::Css("red".to_string()));
            assert_eq!(style.spec_value_text_color, Color::Css("red".to_string()));
            assert_eq!(style.table_width, 80);
            assert_eq!(style.table_border_color.to_css(), "hsl(0 0% 90%)");
            assert_eq!(style.spec_name_font_weight, 700);
        }

        let stored = serde_json::to_value(&profiles).unwrap();
        assert_eq!(stored["desktop"]["oddRowColor"], "rgba(0, 0, 0, 0.05)");
        assert_eq!(stored["mobile"]["specValueTextColor"], "red");
        assert_eq!(migrate(&stored), profiles);
    }

    #[test]
    fn test_tiered_input_is_kept() {
        let raw = json!({
            "mobile": {"tableWidth": 100, "specNameFontSize": 12},
            "tablet": {"tableWidth": 90},
            "desktop": {"tableWidth": 70}
        });
        let profiles = migrate(&raw);

        assert_eq!(profiles.mobile.spec_name_font_size, 12);
        assert_eq!(profiles.tablet.table_width, 90);
        assert_eq!(profiles.desktop.table_width, 70);
    }

    #[test]
    fn test_partial_tiers_are_treated_as_legacy() {
        let raw = json!({
            "mobile": {"tableWidth": 50},
            "desktop": {"tableWidth": 70}
        });
        assert_eq!(migrate(&raw), StyleProfiles::default());
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let inputs = [
            Value::Null,
            json!({"textColor": "#abcdef", "columnRatio": 30}),
            json!({"mobile": {}, "tablet": {"rowSpacing": 4}, "desktop": {"fontFamily": "Inter"}}),
        ];

        for raw in inputs {
            let once = migrate(&raw);
            let twice = migrate(&serde_json::to_value(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_resolve_raw_falls_back_to_desktop() {
        let raw = json!({"desktop": {"tableWidth": 75}});
        let style = resolve_raw(raw.as_object().unwrap(), Device::Mobile);
        assert_eq!(style.table_width, 75);

        let empty = Map::new();
        assert_eq!(resolve_raw(&empty, Device::Tablet), StyleSet::default());
    }

    #[test]
    fn test_copy_overwrites_target_only() {
        let mut profiles = StyleProfiles::default();
        profiles.tablet.table_width = 85;
        profiles.tablet.set_row_striping(true);
        profiles.desktop.table_width = 60;

        let copied = copy(&profiles, Device::Tablet, Device::Mobile);
        assert_eq!(copied.mobile, profiles.tablet);
        assert_eq!(copied.tablet, profiles.tablet);
        assert_eq!(copied.desktop, profiles.desktop);

        // Source profiles untouched
        assert_eq!(profiles.mobile, StyleSet::default());
    }

    #[test]
    fn test_resolve_returns_device_set() {
        let mut profiles = StyleProfiles::default();
        profiles.mobile.cell_padding_vertical = 4;
        assert_eq!(resolve(&profiles, Device::Mobile).cell_padding_vertical, 4);
        assert_eq!(resolve(&profiles, Device::Desktop).cell_padding_vertical, 8);
    }
}
