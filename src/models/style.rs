//! Style profiles: per-device visual settings of a specification table.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::models::{Color, Device};

/// Horizontal placement of the table inside its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlignment {
    /// Flush left
    Left,
    /// Centered
    #[default]
    Center,
    /// Flush right
    Right,
}

/// Complete set of visual style properties for one device tier.
///
/// Every property has a default (see the [`Default`] impl), so a partially
/// stored set always deserializes into a complete one. Sizes are in pixels
/// unless noted otherwise.
///
/// Older editors stored numbers and switches as text. Sizes accept `80`,
/// `"80"`, `"80px"` and `"80%"`; font weights also accept `"normal"` and
/// `"bold"`; switches accept `"true"` and `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSet {
    // Table box
    /// Table width in percent of the container
    #[serde(deserialize_with = "stored_number")]
    pub table_width: u16,
    /// Space above the table
    #[serde(deserialize_with = "stored_number")]
    pub table_margin_top: u16,
    /// Space below the table
    #[serde(deserialize_with = "stored_number")]
    pub table_margin_bottom: u16,
    /// Placement of the table
    pub table_alignment: TableAlignment,
    /// Outer border width
    #[serde(deserialize_with = "stored_number")]
    pub table_border_width: u16,
    /// Outer border color
    pub table_border_color: Color,
    /// Outer corner radius
    #[serde(deserialize_with = "stored_number")]
    pub table_border_radius: u16,
    /// Table background
    pub table_background_color: Color,
    /// Font family for all text (CSS value)
    pub font_family: String,

    // Table name
    /// Whether the table name is shown above the table
    #[serde(deserialize_with = "stored_bool")]
    pub show_table_name: bool,
    /// Table name color
    pub table_name_color: Color,
    /// Table name font size
    #[serde(deserialize_with = "stored_number")]
    pub table_name_font_size: u16,
    /// Table name font weight (100-900)
    #[serde(deserialize_with = "stored_font_weight")]
    pub table_name_font_weight: u16,

    // Section headings
    /// Section heading text color
    pub section_heading_color: Color,
    /// Section heading background
    pub section_heading_background_color: Color,
    /// Section heading font size
    #[serde(deserialize_with = "stored_number")]
    pub section_heading_font_size: u16,
    /// Section heading font weight (100-900)
    #[serde(deserialize_with = "stored_font_weight")]
    pub section_heading_font_weight: u16,

    // Specification name cell
    /// Name cell text color
    pub spec_name_text_color: Color,
    /// Name cell font size
    #[serde(deserialize_with = "stored_number")]
    pub spec_name_font_size: u16,
    /// Name cell font weight (100-900)
    #[serde(deserialize_with = "stored_font_weight")]
    pub spec_name_font_weight: u16,

    // Value cell
    /// Value cell text color
    pub spec_value_text_color: Color,
    /// Value cell font size
    #[serde(deserialize_with = "stored_number")]
    pub spec_value_font_size: u16,
    /// Value cell font weight (100-900)
    #[serde(deserialize_with = "stored_font_weight")]
    pub spec_value_font_weight: u16,

    // Rows and cells
    /// Flat cell background used when no striping is active
    pub cell_background_color: Color,
    /// Vertical cell padding
    #[serde(deserialize_with = "stored_number")]
    pub cell_padding_vertical: u16,
    /// Horizontal cell padding
    #[serde(deserialize_with = "stored_number")]
    pub cell_padding_horizontal: u16,
    /// Divider width between rows
    #[serde(deserialize_with = "stored_number")]
    pub row_border_width: u16,
    /// Divider color between rows
    pub row_border_color: Color,
    /// Gap between rows
    #[serde(deserialize_with = "stored_number")]
    pub row_spacing: u16,
    /// Width of the name column in percent of the row
    #[serde(deserialize_with = "stored_number")]
    pub column_ratio: u8,
    /// Gap between the two columns of a split view
    #[serde(deserialize_with = "stored_number")]
    pub column_gap: u16,

    // Striping
    /// Alternate row colors
    #[serde(deserialize_with = "stored_bool")]
    pub row_striping_enabled: bool,
    /// Background of odd rows (first row is odd)
    pub odd_row_color: Color,
    /// Background of even rows
    pub even_row_color: Color,
    /// Separate colors for the name and value columns
    #[serde(deserialize_with = "stored_bool")]
    pub column_striping_enabled: bool,
    /// Background of the name column
    pub odd_column_color: Color,
    /// Background of the value column
    pub even_column_color: Color,

    // See more / see less button
    /// Button label while truncated
    pub see_more_label: String,
    /// Button label while expanded
    pub see_less_label: String,
    /// Button text color
    pub button_text_color: Color,
    /// Button background
    pub button_background_color: Color,
    /// Button border color
    pub button_border_color: Color,
    /// Button border width
    #[serde(deserialize_with = "stored_number")]
    pub button_border_width: u16,
    /// Button corner radius
    #[serde(deserialize_with = "stored_number")]
    pub button_border_radius: u16,
    /// Button font size
    #[serde(deserialize_with = "stored_number")]
    pub button_font_size: u16,
    /// Vertical button padding
    #[serde(deserialize_with = "stored_number")]
    pub button_padding_vertical: u16,
    /// Horizontal button padding
    #[serde(deserialize_with = "stored_number")]
    pub button_padding_horizontal: u16,

    // Tooltips
    /// Tooltip icon color
    pub tooltip_icon_color: Color,
    /// Tooltip bubble background
    pub tooltip_background_color: Color,
    /// Tooltip bubble text color
    pub tooltip_text_color: Color,

    // Accordion
    /// Accordion header background
    pub accordion_header_color: Color,
    /// Accordion chevron color
    pub accordion_icon_color: Color,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            table_width: 100,
            table_margin_top: 0,
            table_margin_bottom: 24,
            table_alignment: TableAlignment::Center,
            table_border_width: 1,
            table_border_color: Color::rgb(0xe5, 0xe5, 0xe5),
            table_border_radius: 0,
            table_background_color: Color::rgb(0xff, 0xff, 0xff),
            font_family: "inherit".to_string(),

            show_table_name: true,
            table_name_color: Color::rgb(0x11, 0x11, 0x11),
            table_name_font_size: 20,
            table_name_font_weight: 600,

            section_heading_color: Color::rgb(0x11, 0x11, 0x11),
            section_heading_background_color: Color::rgb(0xf5, 0xf5, 0xf5),
            section_heading_font_size: 16,
            section_heading_font_weight: 600,

            spec_name_text_color: Color::rgb(0x33, 0x33, 0x33),
            spec_name_font_size: 14,
            spec_name_font_weight: 500,

            spec_value_text_color: Color::rgb(0x55, 0x55, 0x55),
            spec_value_font_size: 14,
            spec_value_font_weight: 400,

            cell_background_color: Color::rgb(0xff, 0xff, 0xff),
            cell_padding_vertical: 8,
            cell_padding_horizontal: 12,
            row_border_width: 1,
            row_border_color: Color::rgb(0xee, 0xee, 0xee),
            row_spacing: 0,
            column_ratio: 40,
            column_gap: 24,

            row_striping_enabled: false,
            odd_row_color: Color::rgb(0xff, 0xff, 0xff),
            even_row_color: Color::rgb(0xf7, 0xf7, 0xf7),
            column_striping_enabled: false,
            odd_column_color: Color::rgb(0xf7, 0xf7, 0xf7),
            even_column_color: Color::rgb(0xff, 0xff, 0xff),

            see_more_label: "See more".to_string(),
            see_less_label: "See less".to_string(),
            button_text_color: Color::rgb(0xff, 0xff, 0xff),
            button_background_color: Color::rgb(0x11, 0x11, 0x11),
            button_border_color: Color::rgb(0x11, 0x11, 0x11),
            button_border_width: 1,
            button_border_radius: 4,
            button_font_size: 14,
            button_padding_vertical: 8,
            button_padding_horizontal: 16,

            tooltip_icon_color: Color::rgb(0x88, 0x88, 0x88),
            tooltip_background_color: Color::rgb(0x22, 0x22, 0x22),
            tooltip_text_color: Color::rgb(0xff, 0xff, 0xff),

            accordion_header_color: Color::rgb(0xf5, 0xf5, 0xf5),
            accordion_icon_color: Color::rgb(0x33, 0x33, 0x33),
        }
    }
}

impl StyleSet {
    /// Turns row striping on or off. Turning it on disables column striping.
    pub fn set_row_striping(&mut self, enabled: bool) {
        self.row_striping_enabled = enabled;
        if enabled {
            self.column_striping_enabled = false;
        }
    }

    /// Turns column striping on or off. Turning it on disables row striping.
    pub fn set_column_striping(&mut self, enabled: bool) {
        self.column_striping_enabled = enabled;
        if enabled {
            self.row_striping_enabled = false;
        }
    }
}

/// Style sets for all three device tiers.
///
/// Deserialization always goes through
/// [`crate::services::style_profiles::migrate`], so a loaded value never
/// carries a legacy flat or partial profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleProfiles {
    /// Phones
    pub mobile: StyleSet,
    /// Tablets
    pub tablet: StyleSet,
    /// Desktop browsers
    pub desktop: StyleSet,
}

impl StyleProfiles {
    /// Creates profiles with the same style on every device.
    #[must_use]
    pub fn uniform(style: StyleSet) -> Self {
        Self {
            mobile: style.clone(),
            tablet: style.clone(),
            desktop: style,
        }
    }

    /// Gets the style set for a device.
    #[must_use]
    pub const fn get(&self, device: Device) -> &StyleSet {
        match device {
            Device::Mobile => &self.mobile,
            Device::Tablet => &self.tablet,
            Device::Desktop => &self.desktop,
        }
    }

    /// Gets a mutable reference to the style set for a device.
    pub fn get_mut(&mut self, device: Device) -> &mut StyleSet {
        match device {
            Device::Mobile => &mut self.mobile,
            Device::Tablet => &mut self.tablet,
            Device::Desktop => &mut self.desktop,
        }
    }
}

impl<'de> Deserialize<'de> for StyleProfiles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::services::style_profiles::migrate(&raw))
    }
}

/// A number as stored: JSON number or text.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber<T> {
    Number(T),
    Float(f64),
    Text(String),
}

fn number_from_text<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    let digits = text
        .strip_suffix("px")
        .or_else(|| text.strip_suffix("PX"))
        .or_else(|| text.strip_suffix('%'))
        .unwrap_or(text)
        .trim();

    digits
        .parse()
        .ok()
        .or_else(|| number_from_float(digits.parse().ok()?))
}

/// Accepts whole floats such as `80.0`.
fn number_from_float<T: FromStr>(value: f64) -> Option<T> {
    if value.fract().abs() > 0.0 {
        return None;
    }
    format!("{value}").parse().ok()
}

fn stored_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let parsed = match StoredNumber::<T>::deserialize(deserializer)? {
        StoredNumber::Number(value) => return Ok(value),
        StoredNumber::Float(value) => number_from_float(value),
        StoredNumber::Text(text) => number_from_text(&text),
    };
    parsed.ok_or_else(|| D::Error::custom("expected a size in pixels or percent"))
}

fn stored_font_weight<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match StoredNumber::<u16>::deserialize(deserializer)? {
        StoredNumber::Number(value) => return Ok(value),
        StoredNumber::Float(value) => number_from_float(value),
        StoredNumber::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(400),
            "bold" => Some(700),
            other => number_from_text(other),
        },
    };
    parsed.ok_or_else(|| D::Error::custom("expected a font weight"))
}

/// A switch as stored: JSON boolean or `"true"` / `"false"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBool {
    Bool(bool),
    Text(String),
}

fn stored_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredBool::deserialize(deserializer)? {
        StoredBool::Bool(value) => Ok(value),
        StoredBool::Text(text) if text.trim().eq_ignore_ascii_case("true") => Ok(true),
        StoredBool::Text(text) if text.trim().eq_ignore_ascii_case("false") => Ok(false),
        StoredBool::Text(text) => Err(D::Error::custom(format!("expected true or false, got '{text}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style_set_fills_defaults() {
        let style: StyleSet =
            serde_json::from_str(r##"{"tableWidth": 80, "oddRowColor": "#000"}"##).unwrap();
        assert_eq!(style.table_width, 80);
        assert_eq!(style.odd_row_color, Color::rgb(0, 0, 0));
        assert_eq!(style.even_row_color, StyleSet::default().even_row_color);
        assert_eq!(style.see_more_label, "See more");
    }

    #[test]
    fn test_numbers_and_switches_stored_as_text() {
        let style: StyleSet = serde_json::from_str(
            r#"{
                "tableWidth": "80",
                "cellPaddingVertical": "6px",
                "columnRatio": "35%",
                "rowSpacing": 2.0,
                "specNameFontWeight": "bold",
                "specValueFontWeight": "300",
                "rowStripingEnabled": "true"
            }"#,
        )
        .unwrap();

        assert_eq!(style.table_width, 80);
        assert_eq!(style.cell_padding_vertical, 6);
        assert_eq!(style.column_ratio, 35);
        assert_eq!(style.row_spacing, 2);
        assert_eq!(style.spec_name_font_weight, 700);
        assert_eq!(style.spec_value_font_weight, 300);
        assert!(style.row_striping_enabled);
    }

    #[test]
    fn test_unusable_numbers_are_rejected() {
        assert!(serde_json::from_str::<StyleSet>(r#"{"tableWidth": "wide"}"#).is_err());
        assert!(serde_json::from_str::<StyleSet>(r#"{"tableWidth": 80.5}"#).is_err());
        assert!(serde_json::from_str::<StyleSet>(r#"{"columnRatio": 300}"#).is_err());
        assert!(serde_json::from_str::<StyleSet>(r#"{"showTableName": "yes"}"#).is_err());
    }

    #[test]
    fn test_striping_setters_are_exclusive() {
        let mut style = StyleSet::default();
        style.set_row_striping(true);
        style.set_column_striping(true);
        assert!(style.column_striping_enabled);
        assert!(!style.row_striping_enabled);

        style.set_row_striping(true);
        assert!(style.row_striping_enabled);
        assert!(!style.column_striping_enabled);

        style.set_row_striping(false);
        assert!(!style.row_striping_enabled);
        assert!(!style.column_striping_enabled);
    }

    #[test]
    fn test_profiles_get_mut() {
        let mut profiles = StyleProfiles::default();
        profiles.get_mut(Device::Tablet).table_width = 70;
        assert_eq!(profiles.get(Device::Tablet).table_width, 70);
        assert_eq!(profiles.get(Device::Desktop).table_width, 100);
    }
}
