//! Crate-wide constants.
//!
//! Defaults for the tunables in [`crate::config::EngineConfig`].

/// Items each column shows before "see more" in the split-per-section view.
pub const PER_COLUMN_LIMIT: usize = 10;

/// Items shown before "see more" without a split view. The split-per-item
/// view shows twice as many, spread over both columns.
pub const GLOBAL_LIMIT: usize = 10;

/// Largest section count partitioned by exact search; above it the
/// partitioner falls back to a greedy pass.
pub const EXHAUSTIVE_MAX_SECTIONS: usize = 10;

/// Upper bound accepted for the exhaustive-search threshold (2^20 leaves).
pub const EXHAUSTIVE_MAX_SECTIONS_LIMIT: usize = 20;

/// Label rendered for a custom field whose definition no longer exists.
pub const DELETED_FIELD_LABEL: &str = "Deleted";
