//! Shared test fixtures for layout engine integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use spectable::models::{DisplayFlags, Section, SpecItem, Template};
use spectable::services::{FieldDefinition, FieldDefinitions, SectionWeight};

/// Creates a section of `count` custom specs named "`heading` n".
pub fn numbered_section(heading: &str, count: usize) -> Section {
    (0..count).fold(Section::new(heading), |section, n| {
        section.with_item(SpecItem::custom_spec(format!("{heading} {n}"), n.to_string()))
    })
}

/// Creates a template with one numbered section per count.
///
/// Sections are headed "S0", "S1", ...
pub fn template_with_counts(counts: &[usize]) -> Template {
    counts
        .iter()
        .enumerate()
        .fold(Template::new("Specifications"), |template, (index, count)| {
            template.with_section(numbered_section(&format!("S{index}"), *count))
        })
}

/// Same as [`template_with_counts`] with the given flags.
pub fn template_with_flags(counts: &[usize], flags: DisplayFlags) -> Template {
    let mut template = template_with_counts(counts);
    template.display_flags = flags;
    template
}

/// Section weights for the given counts, indexed from 0.
pub fn weights(counts: &[usize]) -> Vec<SectionWeight> {
    counts
        .iter()
        .enumerate()
        .map(|(index, count)| SectionWeight::new(index, *count))
        .collect()
}

/// Field definitions containing "Fabric" (gid://fabric) and "Care"
/// (gid://care).
pub fn store_definitions() -> FieldDefinitions {
    let definition = |key: &str, name: &str| FieldDefinition {
        namespace: "custom".to_string(),
        key: key.to_string(),
        name: name.to_string(),
        owner_type: "PRODUCT".to_string(),
    };

    FieldDefinitions::new()
        .with("gid://fabric", definition("fabric", "Fabric"))
        .with("gid://care", definition("care", "Care"))
}

/// Deterministic pseudo-random item counts (xorshift), 0..=max each.
pub fn pseudo_random_counts(seed: u64, len: usize, max: usize) -> Vec<usize> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            #[allow(clippy::cast_possible_truncation)]
            let value = (state % (max as u64 + 1)) as usize;
            value
        })
        .collect()
}
