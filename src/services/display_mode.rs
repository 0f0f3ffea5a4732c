//! Display mode guard.
//!
//! Every change to a template's display flags goes through [`set_flag`], the
//! single place where the mutual-exclusivity rules live:
//!
//! - accordion, see-more and collapsible table exclude each other, and a
//!   mode that gets switched off loses its device sub-flags
//! - the two split views exclude each other
//! - the two sides of a device sub-flag pair exclude each other
//! - switching the collapsible table off clears its device sub-flags

use crate::models::{DisplayFlag, DisplayFlags};

/// Top-level modes that exclude each other, with their device sub-flags.
const EXCLUSIVE_MODES: [(DisplayFlag, [DisplayFlag; 2]); 3] = [
    (
        DisplayFlag::Accordion,
        [
            DisplayFlag::AccordionHideFromPc,
            DisplayFlag::AccordionHideFromMobile,
        ],
    ),
    (
        DisplayFlag::SeeMore,
        [
            DisplayFlag::SeeMoreHideFromPc,
            DisplayFlag::SeeMoreHideFromMobile,
        ],
    ),
    (
        DisplayFlag::CollapsibleTable,
        [DisplayFlag::CollapsibleOnPc, DisplayFlag::CollapsibleOnMobile],
    ),
];

const SPLIT_MODES: [DisplayFlag; 2] = [DisplayFlag::SplitPerSection, DisplayFlag::SplitPerMetafield];

/// Returns the other side of a device sub-flag pair.
const fn sibling(flag: DisplayFlag) -> Option<DisplayFlag> {
    match flag {
        DisplayFlag::AccordionHideFromPc => Some(DisplayFlag::AccordionHideFromMobile),
        DisplayFlag::AccordionHideFromMobile => Some(DisplayFlag::AccordionHideFromPc),
        DisplayFlag::SeeMoreHideFromPc => Some(DisplayFlag::SeeMoreHideFromMobile),
        DisplayFlag::SeeMoreHideFromMobile => Some(DisplayFlag::SeeMoreHideFromPc),
        DisplayFlag::CollapsibleOnPc => Some(DisplayFlag::CollapsibleOnMobile),
        DisplayFlag::CollapsibleOnMobile => Some(DisplayFlag::CollapsibleOnPc),
        _ => None,
    }
}

/// Sets one display flag and applies every rule that depends on it.
///
/// Pure and total: the input is not modified and a new value is returned.
/// Inputs that already violate an invariant are normalized first (see
/// [`DisplayFlags::normalized`]), so the result is always consistent.
///
/// # Examples
///
/// ```
/// use spectable::models::{DisplayFlag, DisplayFlags};
/// use spectable::services::display_mode::set_flag;
///
/// let flags = set_flag(DisplayFlags::default(), DisplayFlag::Accordion, true);
/// let flags = set_flag(flags, DisplayFlag::SeeMore, true);
/// assert!(flags.see_more);
/// assert!(!flags.accordion);
/// ```
#[must_use]
pub fn set_flag(flags: DisplayFlags, flag: DisplayFlag, value: bool) -> DisplayFlags {
    let mut next = flags.normalized();
    next.put(flag, value);

    if value {
        if EXCLUSIVE_MODES.iter().any(|(mode, _)| *mode == flag) {
            for (mode, sub_flags) in EXCLUSIVE_MODES {
                if mode != flag {
                    next.put(mode, false);
                    for sub in sub_flags {
                        next.put(sub, false);
                    }
                }
            }
        }

        if SPLIT_MODES.contains(&flag) {
            for split in SPLIT_MODES {
                if split != flag {
                    next.put(split, false);
                }
            }
        }

        if let Some(other) = sibling(flag) {
            next.put(other, false);
        }
    } else if flag == DisplayFlag::CollapsibleTable {
        next.collapsible_on_pc = false;
        next.collapsible_on_mobile = false;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every combination of the eleven flags.
    fn every_start() -> impl Iterator<Item = DisplayFlags> {
        (0u32..1 << DisplayFlag::ALL.len()).map(|bits| {
            let mut flags = DisplayFlags::default();
            for (i, flag) in DisplayFlag::ALL.iter().enumerate() {
                flags.put(*flag, bits & (1 << i) != 0);
            }
            flags
        })
    }

    #[test]
    fn test_enabling_mode_clears_other_modes_and_their_sub_flags() {
        let flags = DisplayFlags {
            accordion: true,
            accordion_hide_from_mobile: true,
            collapsible_on_pc: true,
            ..DisplayFlags::default()
        };

        let next = set_flag(flags, DisplayFlag::SeeMore, true);
        assert!(next.see_more);
        assert!(!next.accordion);
        assert!(!next.collapsible_table);
        assert!(!next.accordion_hide_from_mobile);
        assert!(!next.collapsible_on_pc);
    }

    #[test]
    fn test_enabling_mode_keeps_own_sub_flags() {
        let flags = DisplayFlags {
            see_more_hide_from_pc: true,
            ..DisplayFlags::default()
        };
        let next = set_flag(flags, DisplayFlag::SeeMore, true);
        assert!(next.see_more_hide_from_pc);
    }

    #[test]
    fn test_split_modes_exclusive() {
        let flags = set_flag(DisplayFlags::default(), DisplayFlag::SplitPerSection, true);
        let flags = set_flag(flags, DisplayFlag::SplitPerMetafield, true);
        assert!(flags.split_per_metafield);
        assert!(!flags.split_per_section);
    }

    #[test]
    fn test_split_does_not_touch_group_a() {
        let flags = DisplayFlags {
            see_more: true,
            ..DisplayFlags::default()
        };
        let next = set_flag(flags, DisplayFlag::SplitPerSection, true);
        assert!(next.see_more);
        assert!(next.split_per_section);
    }

    #[test]
    fn test_sub_flag_pairs_toggle() {
        let flags = set_flag(
            DisplayFlags::default(),
            DisplayFlag::SeeMoreHideFromPc,
            true,
        );
        let flags = set_flag(flags, DisplayFlag::SeeMoreHideFromMobile, true);
        assert!(flags.see_more_hide_from_mobile);
        assert!(!flags.see_more_hide_from_pc);

        // Clearing one side leaves the other alone
        let flags = set_flag(flags, DisplayFlag::SeeMoreHideFromPc, false);
        assert!(flags.see_more_hide_from_mobile);
    }

    #[test]
    fn test_disabling_collapsible_clears_device_flags() {
        let flags = DisplayFlags {
            collapsible_table: true,
            collapsible_on_mobile: true,
            ..DisplayFlags::default()
        };
        let next = set_flag(flags, DisplayFlag::CollapsibleTable, false);
        assert!(!next.collapsible_table);
        assert!(!next.collapsible_on_mobile);
        assert!(!next.collapsible_on_pc);
    }

    #[test]
    fn test_disabling_accordion_keeps_sub_flags() {
        let flags = DisplayFlags {
            accordion: true,
            accordion_hide_from_pc: true,
            ..DisplayFlags::default()
        };
        let next = set_flag(flags, DisplayFlag::Accordion, false);
        assert!(!next.accordion);
        assert!(next.accordion_hide_from_pc);
    }

    #[test]
    fn test_input_is_not_modified() {
        let flags = DisplayFlags::default();
        let _ = set_flag(flags, DisplayFlag::Accordion, true);
        assert_eq!(flags, DisplayFlags::default());
    }

    #[test]
    fn test_inconsistent_input_is_repaired() {
        let flags = DisplayFlags {
            accordion: true,
            see_more: true,
            ..DisplayFlags::default()
        };
        let next = set_flag(flags, DisplayFlag::SplitPerSection, true);
        assert!(next.accordion);
        assert!(!next.see_more);
    }

    #[test]
    fn test_exclusivity_laws_hold_for_every_start() {
        for start in every_start() {
            for flag in DisplayFlag::ALL {
                for value in [true, false] {
                    let next = set_flag(start, flag, value);
                    assert!(
                        next.is_consistent(),
                        "set_flag({flag:?}, {value}) from {start:?} gave {next:?}"
                    );
                    assert_eq!(next.get(flag), value);
                }
            }
        }
    }
}
