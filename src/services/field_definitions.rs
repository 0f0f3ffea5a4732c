//! Field definition lookup and row label resolution.
//!
//! Custom field definitions live in the commerce platform. Whatever syncs them
//! implements [`FieldDefinitionLookup`]; the planner only asks it for display
//! names. A definition that cannot be found is treated as deleted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::models::{ItemKind, SpecItem};

/// A store custom field definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Definition namespace (e.g., "custom")
    pub namespace: String,
    /// Definition key within the namespace
    pub key: String,
    /// Merchant-facing display name
    pub name: String,
    /// Resource type the field belongs to (e.g., "PRODUCT")
    pub owner_type: String,
}

/// Resolves field definition ids to definitions.
pub trait FieldDefinitionLookup {
    /// Returns the definition with the given id, or `None` if it no longer
    /// exists.
    fn field_definition(&self, id: &str) -> Option<FieldDefinition>;
}

impl FieldDefinitionLookup for HashMap<String, FieldDefinition> {
    fn field_definition(&self, id: &str) -> Option<FieldDefinition> {
        self.get(id).cloned()
    }
}

/// In-memory set of field definitions keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinitions {
    definitions: HashMap<String, FieldDefinition>,
}

impl FieldDefinitions {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, id: impl Into<String>, definition: FieldDefinition) {
        self.definitions.insert(id.into(), definition);
    }

    /// Adds a definition, builder style.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, definition: FieldDefinition) -> Self {
        self.insert(id, definition);
        self
    }
}

impl FieldDefinitionLookup for FieldDefinitions {
    fn field_definition(&self, id: &str) -> Option<FieldDefinition> {
        self.definitions.get(id).cloned()
    }
}

/// Label and value of a row, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    /// Specification name cell text
    pub label: String,
    /// Value cell text, when the value is known without product data
    pub value: Option<String>,
}

/// Resolves the label and inline value of an item.
///
/// - metafield: the placeholder if the definition is gone, otherwise the
///   custom name or the definition name. The value comes from product data
///   at paint time.
/// - product spec: the custom name or the attribute's built-in label. The
///   value comes from product data at paint time.
/// - custom spec: the custom name or the inline name; the inline value with
///   prefix and suffix.
pub fn row_text(
    item: &SpecItem,
    lookup: &dyn FieldDefinitionLookup,
    deleted_placeholder: &str,
) -> RowText {
    match &item.kind {
        ItemKind::Metafield { definition_id } => match lookup.field_definition(definition_id) {
            Some(definition) => RowText {
                label: item
                    .custom_label()
                    .map_or(definition.name, ToString::to_string),
                value: None,
            },
            None => {
                warn!(definition_id = %definition_id, "Field definition not found, rendering placeholder");
                RowText {
                    label: deleted_placeholder.to_string(),
                    value: None,
                }
            }
        },
        ItemKind::ProductSpec { attribute } => RowText {
            label: item
                .custom_label()
                .unwrap_or(attribute.default_label())
                .to_string(),
            value: None,
        },
        ItemKind::CustomSpec { name, value } => RowText {
            label: item.custom_label().unwrap_or(name.as_str()).to_string(),
            value: Some(item.decorate_value(value)),
        },
    }
}
