//! Service layer for layout logic.
//!
//! Each service is a set of pure functions over the models. The
//! [`LayoutPlanner`] composes them into a device-specific render plan.

pub mod display_mode;
pub mod field_definitions;
pub mod pagination;
pub mod partition;
pub mod planner;
pub mod striping;
pub mod style_profiles;

// Re-export commonly used types and functions
pub use display_mode::set_flag;
pub use field_definitions::{FieldDefinition, FieldDefinitionLookup, FieldDefinitions};
pub use partition::{partition, Partition, SectionWeight};
pub use planner::{ColumnPlan, LayoutPlanner, RenderPlan, RenderedRow, SectionPlan};
