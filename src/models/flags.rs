//! Display mode flags of a specification table.

use serde::{Deserialize, Serialize};

use crate::models::Device;

/// Boolean display flags stored with a template.
///
/// # Invariants
///
/// - At most one of `accordion`, `see_more`, `collapsible_table` is true.
/// - `split_per_section` and `split_per_metafield` are never both true.
/// - Each device sub-flag pair has at most one side set.
///
/// Mutations go through [`crate::services::display_mode::set_flag`], which
/// keeps these invariants. Stored values are repaired by
/// [`DisplayFlags::normalized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayFlags {
    /// Sections render as expandable accordion panels
    pub accordion: bool,
    /// Long tables are truncated behind a "see more" button
    pub see_more: bool,
    /// The whole table collapses behind its name
    pub collapsible_table: bool,
    /// Sections are balanced across two columns
    pub split_per_section: bool,
    /// Items alternate across two columns
    pub split_per_metafield: bool,
    /// Accordion disabled on tablet and desktop
    #[serde(rename = "accordionHideFromPC")]
    pub accordion_hide_from_pc: bool,
    /// Accordion disabled on mobile
    pub accordion_hide_from_mobile: bool,
    /// See-more disabled on tablet and desktop
    #[serde(rename = "seeMoreHideFromPC")]
    pub see_more_hide_from_pc: bool,
    /// See-more disabled on mobile
    pub see_more_hide_from_mobile: bool,
    /// Collapsible table only on tablet and desktop
    #[serde(rename = "collapsibleOnPC")]
    pub collapsible_on_pc: bool,
    /// Collapsible table only on mobile
    pub collapsible_on_mobile: bool,
}

/// Names of every flag in [`DisplayFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayFlag {
    /// `accordion`
    Accordion,
    /// `seeMore`
    SeeMore,
    /// `collapsibleTable`
    CollapsibleTable,
    /// `splitPerSection`
    SplitPerSection,
    /// `splitPerMetafield`
    SplitPerMetafield,
    /// `accordionHideFromPC`
    #[serde(rename = "accordionHideFromPC")]
    AccordionHideFromPc,
    /// `accordionHideFromMobile`
    AccordionHideFromMobile,
    /// `seeMoreHideFromPC`
    #[serde(rename = "seeMoreHideFromPC")]
    SeeMoreHideFromPc,
    /// `seeMoreHideFromMobile`
    SeeMoreHideFromMobile,
    /// `collapsibleOnPC`
    #[serde(rename = "collapsibleOnPC")]
    CollapsibleOnPc,
    /// `collapsibleOnMobile`
    CollapsibleOnMobile,
}

impl DisplayFlag {
    /// Every flag, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Accordion,
        Self::SeeMore,
        Self::CollapsibleTable,
        Self::SplitPerSection,
        Self::SplitPerMetafield,
        Self::AccordionHideFromPc,
        Self::AccordionHideFromMobile,
        Self::SeeMoreHideFromPc,
        Self::SeeMoreHideFromMobile,
        Self::CollapsibleOnPc,
        Self::CollapsibleOnMobile,
    ];
}

/// Presentation mode a render plan is painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Plain table
    Table,
    /// Sections as accordion panels
    Accordion,
    /// Truncated table with a see more / see less button
    SeeMore,
    /// Table collapsed behind its name
    Collapsible,
}

impl DisplayFlags {
    /// Reads a flag by name.
    #[must_use]
    pub const fn get(&self, flag: DisplayFlag) -> bool {
        match flag {
            DisplayFlag::Accordion => self.accordion,
            DisplayFlag::SeeMore => self.see_more,
            DisplayFlag::CollapsibleTable => self.collapsible_table,
            DisplayFlag::SplitPerSection => self.split_per_section,
            DisplayFlag::SplitPerMetafield => self.split_per_metafield,
            DisplayFlag::AccordionHideFromPc => self.accordion_hide_from_pc,
            DisplayFlag::AccordionHideFromMobile => self.accordion_hide_from_mobile,
            DisplayFlag::SeeMoreHideFromPc => self.see_more_hide_from_pc,
            DisplayFlag::SeeMoreHideFromMobile => self.see_more_hide_from_mobile,
            DisplayFlag::CollapsibleOnPc => self.collapsible_on_pc,
            DisplayFlag::CollapsibleOnMobile => self.collapsible_on_mobile,
        }
    }

    /// Writes a flag by name without enforcing any invariant.
    pub(crate) fn put(&mut self, flag: DisplayFlag, value: bool) {
        let slot = match flag {
            DisplayFlag::Accordion => &mut self.accordion,
            DisplayFlag::SeeMore => &mut self.see_more,
            DisplayFlag::CollapsibleTable => &mut self.collapsible_table,
            DisplayFlag::SplitPerSection => &mut self.split_per_section,
            DisplayFlag::SplitPerMetafield => &mut self.split_per_metafield,
            DisplayFlag::AccordionHideFromPc => &mut self.accordion_hide_from_pc,
            DisplayFlag::AccordionHideFromMobile => &mut self.accordion_hide_from_mobile,
            DisplayFlag::SeeMoreHideFromPc => &mut self.see_more_hide_from_pc,
            DisplayFlag::SeeMoreHideFromMobile => &mut self.see_more_hide_from_mobile,
            DisplayFlag::CollapsibleOnPc => &mut self.collapsible_on_pc,
            DisplayFlag::CollapsibleOnMobile => &mut self.collapsible_on_mobile,
        };
        *slot = value;
    }

    /// Returns a copy that satisfies every invariant.
    ///
    /// Conflicts in stored data resolve deterministically: accordion beats
    /// see-more beats collapsible table, split per section beats split per
    /// metafield, and the PC side of a sub-flag pair beats the mobile side.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut flags = *self;

        if flags.accordion {
            flags.see_more = false;
            flags.collapsible_table = false;
        } else if flags.see_more {
            flags.collapsible_table = false;
        }

        if flags.split_per_section {
            flags.split_per_metafield = false;
        }

        if flags.accordion_hide_from_pc {
            flags.accordion_hide_from_mobile = false;
        }
        if flags.see_more_hide_from_pc {
            flags.see_more_hide_from_mobile = false;
        }
        if flags.collapsible_on_pc {
            flags.collapsible_on_mobile = false;
        }

        flags
    }

    /// Checks the invariants without repairing anything.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let group_a = [self.accordion, self.see_more, self.collapsible_table]
            .iter()
            .filter(|on| **on)
            .count();

        group_a <= 1
            && !(self.split_per_section && self.split_per_metafield)
            && !(self.accordion_hide_from_pc && self.accordion_hide_from_mobile)
            && !(self.see_more_hide_from_pc && self.see_more_hide_from_mobile)
            && !(self.collapsible_on_pc && self.collapsible_on_mobile)
    }

    /// Checks if the accordion applies on the given device.
    #[must_use]
    pub const fn accordion_on(&self, device: Device) -> bool {
        self.accordion
            && !excluded(
                device,
                self.accordion_hide_from_pc,
                self.accordion_hide_from_mobile,
            )
    }

    /// Checks if see-more truncation applies on the given device.
    #[must_use]
    pub const fn see_more_on(&self, device: Device) -> bool {
        self.see_more
            && !excluded(
                device,
                self.see_more_hide_from_pc,
                self.see_more_hide_from_mobile,
            )
    }

    /// Checks if the collapsible table applies on the given device.
    ///
    /// `collapsible_on_pc` restricts the mode to tablet and desktop,
    /// `collapsible_on_mobile` to mobile. Neither set means every device.
    #[must_use]
    pub const fn collapsible_on(&self, device: Device) -> bool {
        if !self.collapsible_table {
            return false;
        }
        match (self.collapsible_on_pc, self.collapsible_on_mobile) {
            (true, _) => !device.is_mobile(),
            (false, true) => device.is_mobile(),
            (false, false) => true,
        }
    }

    /// Resolves the presentation mode for a device.
    #[must_use]
    pub const fn mode_on(&self, device: Device) -> DisplayMode {
        if self.accordion_on(device) {
            DisplayMode::Accordion
        } else if self.see_more_on(device) {
            DisplayMode::SeeMore
        } else if self.collapsible_on(device) {
            DisplayMode::Collapsible
        } else {
            DisplayMode::Table
        }
    }
}

const fn excluded(device: Device, hide_from_pc: bool, hide_from_mobile: bool) -> bool {
    if device.is_mobile() {
        hide_from_mobile
    } else {
        hide_from_pc
    }
}
