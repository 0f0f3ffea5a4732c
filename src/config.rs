//! Configuration for the layout engine.
//!
//! The engine runs with built-in defaults. Hosts that want different limits
//! (a storefront theme with a longer "see more" threshold, say) load an
//! [`EngineConfig`] from TOML:
//!
//! ```toml
//! [pagination]
//! per_column_limit = 8
//! global_limit = 12
//!
//! [partition]
//! exhaustive_max_sections = 10
//!
//! [labels]
//! deleted_placeholder = "Removed field"
//! ```
//!
//! Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{
    DELETED_FIELD_LABEL, EXHAUSTIVE_MAX_SECTIONS, EXHAUSTIVE_MAX_SECTIONS_LIMIT, GLOBAL_LIMIT,
    PER_COLUMN_LIMIT,
};
use crate::services::pagination::PageLimits;

/// "See more" truncation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Items per column in the split-per-section view
    pub per_column_limit: usize,
    /// Items in the single-column view; doubled for split per item
    pub global_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_column_limit: PER_COLUMN_LIMIT,
            global_limit: GLOBAL_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Limits in the form the pagination resolver takes.
    #[must_use]
    pub const fn limits(&self) -> PageLimits {
        PageLimits {
            per_column: self.per_column_limit,
            global: self.global_limit,
        }
    }
}

/// Section partitioning settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Largest section count searched exhaustively
    pub exhaustive_max_sections: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            exhaustive_max_sections: EXHAUSTIVE_MAX_SECTIONS,
        }
    }
}

/// Fallback labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Label for rows whose field definition was deleted
    pub deleted_placeholder: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            deleted_placeholder: DELETED_FIELD_LABEL.to_string(),
        }
    }
}

/// Layout engine configuration.
///
/// # Validation
///
/// - both pagination limits must be at least 1
/// - `exhaustive_max_sections` must not exceed 20
/// - `deleted_placeholder` must not be blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Truncation limits
    pub pagination: PaginationConfig,
    /// Partitioning settings
    pub partition: PartitionConfig,
    /// Fallback labels
    pub labels: LabelConfig,
}

impl EngineConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Saves configuration to a file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.pagination.per_column_limit == 0 {
            anyhow::bail!("pagination.per_column_limit must be at least 1");
        }

        if self.pagination.global_limit == 0 {
            anyhow::bail!("pagination.global_limit must be at least 1");
        }

        if self.partition.exhaustive_max_sections > EXHAUSTIVE_MAX_SECTIONS_LIMIT {
            anyhow::bail!(
                "partition.exhaustive_max_sections must be at most {} (got {})",
                EXHAUSTIVE_MAX_SECTIONS_LIMIT,
                self.partition.exhaustive_max_sections
            );
        }

        if self.labels.deleted_placeholder.trim().is_empty() {
            anyhow::bail!("labels.deleted_placeholder cannot be empty");
        }

        Ok(())
    }
}
