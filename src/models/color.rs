//! CSS color values with hex parsing and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS color as stored in a style profile.
///
/// Templates store colors as strings. The forms the editor produces
/// (`#rgb`, `#rrggbb`, `#rrggbbaa` and `transparent`) are parsed; any other
/// CSS color text (`rgba(...)`, `hsl(...)`, `red`, ...) is kept verbatim and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Opaque or translucent RGB color
    Rgba {
        /// Red channel (0-255)
        r: u8,
        /// Green channel (0-255)
        g: u8,
        /// Blue channel (0-255)
        b: u8,
        /// Alpha channel (0-255, 255 = opaque)
        a: u8,
    },
    /// The `transparent` keyword
    Transparent,
    /// Any other CSS color, as stored
    Css(String),
}

impl Color {
    /// Creates an opaque color from individual channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    /// Parses a color from its CSS string form.
    ///
    /// Hex colors and `transparent` are decoded; other text is kept as
    /// [`Color::Css`] so nothing a merchant stored is lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectable::models::Color;
    ///
    /// assert_eq!(Color::from_css("#FF0000").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::from_css("transparent").unwrap(), Color::Transparent);
    /// assert_eq!(
    ///     Color::from_css("rgba(0, 0, 0, 0.05)").unwrap().to_css(),
    ///     "rgba(0, 0, 0, 0.05)"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is blank.
    pub fn from_css(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Invalid color: value is empty");
        }

        Ok(Self::from_hex(trimmed).unwrap_or_else(|_| Self::Css(trimmed.to_string())))
    }

    /// Parses a hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`) or `transparent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectable::models::Color;
    ///
    /// assert_eq!(Color::from_hex("#0f0").unwrap(), Color::rgb(0, 255, 0));
    /// assert!(Color::from_hex("red").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of those forms.
    pub fn from_hex(value: &str) -> Result<Self> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }

        let hex = value
            .strip_prefix('#')
            .with_context(|| format!("Invalid color '{value}'. Expected '#' followed by hex digits"))?;

        if !hex.is_ascii() {
            anyhow::bail!("Invalid color '{value}'. Expected hex digits");
        }

        match hex.len() {
            3 => {
                let r = parse_short_channel(&hex[0..1], value)?;
                let g = parse_short_channel(&hex[1..2], value)?;
                let b = parse_short_channel(&hex[2..3], value)?;
                Ok(Self::rgb(r, g, b))
            }
            6 | 8 => {
                let r = parse_channel(&hex[0..2], value)?;
                let g = parse_channel(&hex[2..4], value)?;
                let b = parse_channel(&hex[4..6], value)?;
                let a = if hex.len() == 8 {
                    parse_channel(&hex[6..8], value)?
                } else {
                    255
                };
                Ok(Self::Rgba { r, g, b, a })
            }
            len => anyhow::bail!(
                "Invalid color '{value}'. Expected 3, 6 or 8 hex digits, got {len}"
            ),
        }
    }

    /// Converts the color to its CSS string form.
    ///
    /// Opaque colors are written as lowercase `#rrggbb`, translucent ones
    /// as `#rrggbbaa`. Other CSS colors are written as stored.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Transparent => "transparent".to_string(),
            Self::Rgba { r, g, b, a: 255 } => format!("#{r:02x}{g:02x}{b:02x}"),
            Self::Rgba { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
            Self::Css(text) => text.clone(),
        }
    }
}

fn parse_channel(digits: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(digits, 16)
        .with_context(|| format!("Invalid channel '{digits}' in color '{original}'"))
}

fn parse_short_channel(digit: &str, original: &str) -> Result<u8> {
    // #abc expands to #aabbcc
    Ok(parse_channel(digit, original)? * 17)
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl Default for Color {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}
