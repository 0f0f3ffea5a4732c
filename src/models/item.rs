//! Specification items: the rows of a specification table.

use serde::{Deserialize, Serialize};

use crate::models::Device;

/// Built-in product attribute a `product_spec` item displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductAttribute {
    /// Product title
    Title,
    /// Vendor / brand
    Vendor,
    /// Product type
    ProductType,
    /// Stock keeping unit of the selected variant
    Sku,
    /// Barcode (ISBN, UPC, GTIN, ...)
    Barcode,
    /// Shipping weight of the selected variant
    Weight,
    /// Price of the selected variant
    Price,
    /// Compare-at price of the selected variant
    CompareAtPrice,
    /// Available inventory
    InventoryQuantity,
    /// Product tags
    Tags,
    /// Collections the product belongs to
    Collections,
}

impl ProductAttribute {
    /// Label shown when the item has no custom name.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Vendor => "Vendor",
            Self::ProductType => "Product type",
            Self::Sku => "SKU",
            Self::Barcode => "Barcode",
            Self::Weight => "Weight",
            Self::Price => "Price",
            Self::CompareAtPrice => "Compare-at price",
            Self::InventoryQuantity => "Inventory",
            Self::Tags => "Tags",
            Self::Collections => "Collections",
        }
    }
}

/// Where a specification item takes its content from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Store custom field, resolved through a field definition lookup
    Metafield {
        /// External field definition id
        #[serde(rename = "definitionId")]
        definition_id: String,
    },
    /// Built-in product attribute
    ProductSpec {
        /// Which attribute to show
        attribute: ProductAttribute,
    },
    /// Manually entered name and value
    CustomSpec {
        /// Row name
        name: String,
        /// Row value
        value: String,
    },
}

/// One row of a specification table.
///
/// # Invariants
///
/// - `hide_from_pc` and `hide_from_mobile` are never both true. The setters
///   enforce this; [`SpecItem::normalized`] repairs stored items that
///   violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecItem {
    /// Content source
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Overrides the resolved label when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    /// Whether the tooltip icon is shown
    #[serde(default)]
    pub tooltip_enabled: bool,
    /// Tooltip body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_text: Option<String>,
    /// Hidden on tablet and desktop
    #[serde(default, rename = "hideFromPC")]
    pub hide_from_pc: bool,
    /// Hidden on mobile
    #[serde(default)]
    pub hide_from_mobile: bool,
    /// Literal text placed before the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Literal text placed after the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl SpecItem {
    fn from_kind(kind: ItemKind) -> Self {
        Self {
            kind,
            custom_name: None,
            tooltip_enabled: false,
            tooltip_text: None,
            hide_from_pc: false,
            hide_from_mobile: false,
            prefix: None,
            suffix: None,
        }
    }

    /// Creates an item referencing a store custom field definition.
    pub fn metafield(definition_id: impl Into<String>) -> Self {
        Self::from_kind(ItemKind::Metafield {
            definition_id: definition_id.into(),
        })
    }

    /// Creates an item showing a built-in product attribute.
    #[must_use]
    pub fn product_spec(attribute: ProductAttribute) -> Self {
        Self::from_kind(ItemKind::ProductSpec { attribute })
    }

    /// Creates an item with an inline name and value.
    pub fn custom_spec(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_kind(ItemKind::CustomSpec {
            name: name.into(),
            value: value.into(),
        })
    }

    /// Sets the custom label.
    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// Enables the tooltip with the given text.
    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip_enabled = true;
        self.tooltip_text = Some(text.into());
        self
    }

    /// Sets the value prefix and suffix.
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self.suffix = Some(suffix.into());
        self
    }

    /// Hides the item on tablet and desktop. Setting `true` clears
    /// `hide_from_mobile`.
    pub fn set_hide_from_pc(&mut self, hide: bool) {
        self.hide_from_pc = hide;
        if hide {
            self.hide_from_mobile = false;
        }
    }

    /// Hides the item on mobile. Setting `true` clears `hide_from_pc`.
    pub fn set_hide_from_mobile(&mut self, hide: bool) {
        self.hide_from_mobile = hide;
        if hide {
            self.hide_from_pc = false;
        }
    }

    /// Returns a copy with the hide-pair invariant restored.
    ///
    /// When both flags are set, `hide_from_pc` wins.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut item = self.clone();
        if item.hide_from_pc && item.hide_from_mobile {
            item.hide_from_mobile = false;
        }
        item
    }

    /// Checks if the item is rendered on the given device.
    #[must_use]
    pub fn is_visible_on(&self, device: Device) -> bool {
        if device.is_mobile() {
            !self.hide_from_mobile
        } else {
            !self.hide_from_pc
        }
    }

    /// Wraps a raw value with the item's prefix and suffix.
    ///
    /// No unit or currency formatting is applied.
    #[must_use]
    pub fn decorate_value(&self, raw: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or_default(),
            raw,
            self.suffix.as_deref().unwrap_or_default()
        )
    }

    /// Returns the tooltip text if the tooltip is enabled and non-empty.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        if !self.tooltip_enabled {
            return None;
        }
        self.tooltip_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Returns the custom name if one is set and non-empty.
    #[must_use]
    pub fn custom_label(&self) -> Option<&str> {
        self.custom_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
