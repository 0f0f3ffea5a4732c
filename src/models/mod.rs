//! Data models for specification templates, items, flags and styles.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are independent of layout logic and of any presentation layer.

pub mod color;
pub mod device;
pub mod flags;
pub mod item;
pub mod style;
pub mod template;

// Re-export all model types
pub use color::Color;
pub use device::Device;
pub use flags::{DisplayFlag, DisplayFlags, DisplayMode};
pub use item::{ItemKind, ProductAttribute, SpecItem};
pub use style::{StyleProfiles, StyleSet, TableAlignment};
pub use template::{Section, Template};
