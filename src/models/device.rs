//! Device tiers a specification table is rendered for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device tier of a render request.
///
/// Tablet and desktop both count as "PC" for the `*HideFromPC` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Phones
    Mobile,
    /// Tablets
    Tablet,
    /// Desktop browsers
    Desktop,
}

impl Device {
    /// All tiers in storage order.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Key used for this tier in stored style profiles.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Checks if this tier is governed by the mobile hide flags.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
