//! Layout planning: from a template snapshot to a device-specific render plan.
//!
//! The planner is the one entry point shared by the editor preview and the
//! storefront renderer. It composes the other services:
//!
//! 1. normalize flags and items
//! 2. pick the device's style set
//! 3. drop items hidden on the device
//! 4. arrange sections in one or two columns
//! 5. paginate
//! 6. resolve labels and stripe the visible rows of each column

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{Device, DisplayMode, SpecItem, StyleSet, Template};
use crate::services::field_definitions::{row_text, FieldDefinitionLookup};
use crate::services::pagination::{self, Arrangement, PaginatedColumn, SectionEntries};
use crate::services::partition::{partition_with_threshold, SectionWeight};
use crate::services::striping::{stripe_for, StripeColors};
use crate::services::style_profiles;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Position of the item within its section
    pub item_index: usize,
    /// The item, normalized
    pub item: SpecItem,
    /// Specification name cell text
    pub label: String,
    /// Value cell text when known without product data (custom specs)
    pub value: Option<String>,
    /// Tooltip text, if the tooltip is shown
    pub tooltip: Option<String>,
    /// Cell backgrounds
    pub stripe: StripeColors,
}

/// One section within a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    /// Position of the section in the template
    pub section_index: usize,
    /// Section heading
    pub heading: String,
    /// Rows to paint
    pub visible: Vec<RenderedRow>,
    /// Items behind "see more"; empty when `show_all` is set
    pub hidden: Vec<SpecItem>,
}

impl SectionPlan {
    /// Checks if the section paints at all. Sections whose rows are all
    /// behind "see more" paint nothing, not even their heading.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        !self.visible.is_empty()
    }
}

/// One column of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnPlan {
    /// Sections in display order, including ones that do not paint
    pub sections: Vec<SectionPlan>,
}

impl ColumnPlan {
    /// Sections that paint, in display order.
    pub fn rendered_sections(&self) -> impl Iterator<Item = &SectionPlan> {
        self.sections.iter().filter(|s| s.is_rendered())
    }

    /// Rows painted in this column, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.sections.iter().flat_map(|s| &s.visible)
    }
}

/// Fully resolved, device-specific table ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    /// Device the plan is for
    pub device: Device,
    /// Table title
    pub table_name: String,
    /// Style set of the device
    pub effective_style: StyleSet,
    /// Presentation mode on the device
    pub mode: DisplayMode,
    /// One column, or two for the split views
    pub columns: Vec<ColumnPlan>,
    /// Whether "see more" truncation applies
    pub has_more: bool,
    /// Whether hidden rows were restored
    pub show_all: bool,
}

impl RenderPlan {
    /// Label of the see more / see less button, if one is shown.
    #[must_use]
    pub fn toggle_label(&self) -> Option<&str> {
        if !self.has_more {
            return None;
        }
        let label = if self.show_all {
            &self.effective_style.see_less_label
        } else {
            &self.effective_style.see_more_label
        };
        Some(label.as_str())
    }

    /// Total rows painted across all columns.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.columns.iter().map(|c| c.rows().count()).sum()
    }
}

/// Computes render plans.
///
/// Holds only configuration, so one planner can serve concurrent render
/// requests.
#[derive(Debug, Clone, Default)]
pub struct LayoutPlanner {
    config: EngineConfig,
}

impl LayoutPlanner {
    /// Creates a planner with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Gets the planner configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Plans a template for one device.
    ///
    /// `show_all` restores rows hidden behind "see more". Pure: the same
    /// inputs always give the same plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectable::models::{Device, Section, SpecItem, Template};
    /// use spectable::services::field_definitions::FieldDefinitions;
    /// use spectable::services::LayoutPlanner;
    ///
    /// let template = Template::new("Specs")
    ///     .with_section(Section::new("General").with_item(SpecItem::custom_spec("Origin", "Italy")));
    ///
    /// let plan = LayoutPlanner::default().plan(&template, Device::Desktop, false, &FieldDefinitions::new());
    /// assert_eq!(plan.columns.len(), 1);
    /// assert_eq!(plan.columns[0].sections[0].visible[0].label, "Origin");
    /// ```
    pub fn plan(
        &self,
        template: &Template,
        device: Device,
        show_all: bool,
        lookup: &dyn FieldDefinitionLookup,
    ) -> RenderPlan {
        let template = template.normalized();
        let flags = template.display_flags;
        let style = style_profiles::resolve(&template.style_profiles, device).clone();

        let entries: Vec<SectionEntries> = template
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let items = section
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.is_visible_on(device))
                    .map(|(item_index, _)| item_index)
                    .collect();
                SectionEntries::new(index, items)
            })
            .filter(|entries| !entries.items.is_empty())
            .collect();

        let arrangement = self.arrange(entries, flags.split_per_section, flags.split_per_metafield);

        let paginated = pagination::resolve(
            &arrangement,
            flags.see_more_on(device),
            show_all,
            self.config.pagination.limits(),
        );

        let columns: Vec<ColumnPlan> = paginated
            .columns
            .iter()
            .map(|column| self.column_plan(&template, &style, column, lookup))
            .collect();

        let plan = RenderPlan {
            device,
            table_name: template.table_name.clone(),
            mode: flags.mode_on(device),
            effective_style: style,
            columns,
            has_more: paginated.has_more,
            show_all,
        };

        debug!(
            device = %device,
            mode = ?plan.mode,
            columns = plan.columns.len(),
            rows = plan.visible_count(),
            has_more = plan.has_more,
            "Planned specification table"
        );

        plan
    }

    fn arrange(
        &self,
        entries: Vec<SectionEntries>,
        split_per_section: bool,
        split_per_item: bool,
    ) -> Arrangement {
        if split_per_section {
            let weights: Vec<SectionWeight> = entries
                .iter()
                .map(|e| SectionWeight::new(e.section, e.items.len()))
                .collect();
            let split =
                partition_with_threshold(&weights, self.config.partition.exhaustive_max_sections);

            let (left, right) = entries
                .into_iter()
                .partition(|e| split.left.contains(&e.section));
            Arrangement::SplitPerSection { left, right }
        } else if split_per_item {
            Arrangement::SplitPerItem(entries)
        } else {
            Arrangement::Single(entries)
        }
    }

    fn column_plan(
        &self,
        template: &Template,
        style: &StyleSet,
        column: &PaginatedColumn,
        lookup: &dyn FieldDefinitionLookup,
    ) -> ColumnPlan {
        let mut row_index = 0;

        let sections = column
            .sections
            .iter()
            .map(|paginated| {
                let section = &template.sections[paginated.section];

                let visible = paginated
                    .visible
                    .iter()
                    .map(|&item_index| {
                        let item = &section.items[item_index];
                        let text = row_text(item, lookup, &self.config.labels.deleted_placeholder);
                        let row = RenderedRow {
                            item_index,
                            item: item.clone(),
                            label: text.label,
                            value: text.value,
                            tooltip: item.tooltip().map(ToString::to_string),
                            stripe: stripe_for(style, row_index),
                        };
                        row_index += 1;
                        row
                    })
                    .collect();

                SectionPlan {
                    section_index: paginated.section,
                    heading: section.heading.clone(),
                    visible,
                    hidden: paginated
                        .hidden
                        .iter()
                        .map(|&item_index| section.items[item_index].clone())
                        .collect(),
                }
            })
            .collect();

        ColumnPlan { sections }
    }
}
