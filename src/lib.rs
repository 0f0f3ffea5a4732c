//! Specification Table Layout Engine
//!
//! This library turns a product specification template (sections of spec
//! items, display flags and per-device styles) into a render plan for one
//! device: which sections go in which column, which rows sit behind
//! "see more", what each row is labelled and how it is striped.
//!
//! The engine is pure. It does no I/O apart from the optional
//! [`config::EngineConfig`] file, and it renders nothing itself.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use models::{Device, DisplayFlags, Template};
pub use services::{LayoutPlanner, RenderPlan};
