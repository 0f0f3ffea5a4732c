//! Template and section data structures.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{DisplayFlags, SpecItem, StyleProfiles};

/// A named, ordered group of specification items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading rendered above the section's rows
    #[serde(default)]
    pub heading: String,
    /// Rows in display order
    #[serde(default)]
    pub items: Vec<SpecItem>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item.
    #[must_use]
    pub fn with_item(mut self, item: SpecItem) -> Self {
        self.items.push(item);
        self
    }
}

/// Complete specification table configuration.
///
/// Templates are edited and stored outside this crate and handed to the
/// planner as an immutable snapshot per render request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Table title
    #[serde(default)]
    pub table_name: String,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Display mode flags
    #[serde(default)]
    pub display_flags: DisplayFlags,
    /// Per-device styles, migrated on load
    #[serde(default)]
    pub style_profiles: StyleProfiles,
}

impl Template {
    /// Creates an empty template with default flags and styles.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Appends a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Parses a stored template.
    ///
    /// Style profiles in any historical shape are migrated to the three-tier
    /// schema; invariant violations in items and flags are left for
    /// [`Template::normalized`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not describe a
    /// template.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse specification template")
    }

    /// Serializes the template in its stored form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize specification template")
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Returns a copy with every flag and item invariant restored.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            table_name: self.table_name.clone(),
            sections: self
                .sections
                .iter()
                .map(|section| Section {
                    heading: section.heading.clone(),
                    items: section.items.iter().map(SpecItem::normalized).collect(),
                })
                .collect(),
            display_flags: self.display_flags.normalized(),
            style_profiles: self.style_profiles.clone(),
        }
    }
}
