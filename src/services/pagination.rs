//! "See more / see less" pagination.
//!
//! Decides which items are shown and which wait behind the "see more" button,
//! for each of the three column arrangements:
//!
//! | Arrangement        | Limit                                        |
//! |--------------------|----------------------------------------------|
//! | single column      | `global` items over the whole table          |
//! | split per section  | `per_column` items in each column            |
//! | split per item     | `2 × global` items, then alternated L/R      |
//!
//! Truncation always cuts a prefix of the ordered item sequence, so items
//! keep their order and a section's visible items always precede its hidden
//! ones.

use serde::{Deserialize, Serialize};

use crate::constants::{GLOBAL_LIMIT, PER_COLUMN_LIMIT};

/// The items of one section that take part in a layout, by item index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntries {
    /// Section position in the template
    pub section: usize,
    /// Item positions within the section, in display order
    pub items: Vec<usize>,
}

impl SectionEntries {
    /// Creates a new `SectionEntries`.
    #[must_use]
    pub fn new(section: usize, items: Vec<usize>) -> Self {
        Self { section, items }
    }
}

/// How sections are laid out before pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrangement {
    /// One column with every section
    Single(Vec<SectionEntries>),
    /// Whole sections balanced over two columns
    SplitPerSection {
        /// Left column sections in template order
        left: Vec<SectionEntries>,
        /// Right column sections in template order
        right: Vec<SectionEntries>,
    },
    /// Items alternate between two columns over the full sequence
    SplitPerItem(Vec<SectionEntries>),
}

/// Item limits applied while "see more" is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLimits {
    /// Items per column in the split-per-section view
    pub per_column: usize,
    /// Items in the single-column view (doubled for split per item)
    pub global: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            per_column: PER_COLUMN_LIMIT,
            global: GLOBAL_LIMIT,
        }
    }
}

/// Pagination result for one section in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedSection {
    /// Section position in the template
    pub section: usize,
    /// Item positions to render
    pub visible: Vec<usize>,
    /// Item positions behind "see more"
    pub hidden: Vec<usize>,
}

impl PaginatedSection {
    /// Checks if the section renders at all. A section whose items are all
    /// hidden does not render its heading.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        !self.visible.is_empty()
    }
}

/// Pagination result for one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedColumn {
    /// Sections in display order, including fully hidden ones
    pub sections: Vec<PaginatedSection>,
}

impl PaginatedColumn {
    /// Sections that render, in display order.
    pub fn rendered_sections(&self) -> impl Iterator<Item = &PaginatedSection> {
        self.sections.iter().filter(|s| s.is_rendered())
    }

    /// Number of items rendered in this column.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.sections.iter().map(|s| s.visible.len()).sum()
    }
}

/// Pagination result for a whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated {
    /// One column, or two for the split views
    pub columns: Vec<PaginatedColumn>,
    /// Whether truncation applies, even when `show_all` restored everything
    pub has_more: bool,
}

/// Paginates an arrangement.
///
/// With `see_more` off every item is visible and `has_more` is false. With
/// `show_all` on, hidden items are moved back into their sections (which keep
/// their column) while `has_more` still reports that truncation applies, so
/// callers can offer "see less".
///
/// Sections without any items are dropped.
#[must_use]
pub fn resolve(
    arrangement: &Arrangement,
    see_more: bool,
    show_all: bool,
    limits: PageLimits,
) -> Paginated {
    let mut columns = match arrangement {
        Arrangement::Single(sections) => {
            vec![truncate(sections, see_more.then_some(limits.global))]
        }
        Arrangement::SplitPerSection { left, right } => {
            let limit = see_more.then_some(limits.per_column);
            vec![truncate(left, limit), truncate(right, limit)]
        }
        Arrangement::SplitPerItem(sections) => alternate(
            sections,
            see_more.then_some(limits.global.saturating_mul(2)),
        ),
    };

    let has_more = columns
        .iter()
        .flat_map(|column| &column.sections)
        .any(|section| !section.hidden.is_empty());

    if show_all {
        for section in columns.iter_mut().flat_map(|column| &mut column.sections) {
            let hidden = std::mem::take(&mut section.hidden);
            section.visible.extend(hidden);
        }
    }

    Paginated { columns, has_more }
}

/// Shows the first `limit` items of a column, counted across its sections.
fn truncate(sections: &[SectionEntries], limit: Option<usize>) -> PaginatedColumn {
    let mut budget = limit.unwrap_or(usize::MAX);

    let sections = sections
        .iter()
        .filter(|entries| !entries.items.is_empty())
        .map(|entries| {
            let shown = budget.min(entries.items.len());
            budget -= shown;
            PaginatedSection {
                section: entries.section,
                visible: entries.items[..shown].to_vec(),
                hidden: entries.items[shown..].to_vec(),
            }
        })
        .collect();

    PaginatedColumn { sections }
}

/// Deals the full item sequence alternately to the left (even positions) and
/// right (odd positions) columns; positions at or beyond `limit` are hidden.
fn alternate(sections: &[SectionEntries], limit: Option<usize>) -> Vec<PaginatedColumn> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut columns = vec![PaginatedColumn::default(), PaginatedColumn::default()];

    let sequence = sections
        .iter()
        .flat_map(|entries| entries.items.iter().map(|item| (entries.section, *item)));

    for (position, (section, item)) in sequence.enumerate() {
        let column = &mut columns[position % 2];

        let needs_entry = column
            .sections
            .last()
            .map_or(true, |last| last.section != section);
        if needs_entry {
            column.sections.push(PaginatedSection {
                section,
                visible: Vec::new(),
                hidden: Vec::new(),
            });
        }

        if let Some(entry) = column.sections.last_mut() {
            if position < limit {
                entry.visible.push(item);
            } else {
                entry.hidden.push(item);
            }
        }
    }

    columns
}
