//! Balanced two-column section partitioning for the split-per-section view.
//!
//! Sections are never split: each one lands whole in the left or the right
//! column. The partitioner picks the assignment whose column item totals
//! differ the least.
//!
//! # Strategy
//!
//! - Up to [`EXHAUSTIVE_MAX_SECTIONS`] sections: exact search over every
//!   assignment, trying "left" before "right" at each section and keeping
//!   the first assignment found with the smallest difference.
//! - More sections: greedy, each section to the column with the smaller
//!   running total (ties go left). The resulting difference never exceeds
//!   the largest section.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::constants::EXHAUSTIVE_MAX_SECTIONS;

/// Item count of one section, keyed by its position in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionWeight {
    /// Section position in the template
    pub index: usize,
    /// Number of items the section renders
    pub item_count: usize,
}

impl SectionWeight {
    /// Creates a new `SectionWeight`.
    #[must_use]
    pub const fn new(index: usize, item_count: usize) -> Self {
        Self { index, item_count }
    }
}

/// Column membership of every section, each side in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    /// Section indices in the left column
    pub left: Vec<usize>,
    /// Section indices in the right column
    pub right: Vec<usize>,
}

impl Partition {
    /// Absolute difference between the column item totals.
    #[must_use]
    pub fn imbalance(&self, sections: &[SectionWeight]) -> usize {
        let total = |side: &[usize]| -> usize {
            sections
                .iter()
                .filter(|s| side.contains(&s.index))
                .fold(0, |sum: usize, s| sum.saturating_add(s.item_count))
        };
        total(&self.left).abs_diff(total(&self.right))
    }
}

/// Partitions sections with the default exhaustive-search threshold.
///
/// # Examples
///
/// ```
/// use spectable::services::partition::{partition, SectionWeight};
///
/// let sections = [SectionWeight::new(0, 7), SectionWeight::new(1, 3), SectionWeight::new(2, 5)];
/// let result = partition(&sections);
/// assert_eq!(result.left, vec![0]);
/// assert_eq!(result.right, vec![1, 2]);
/// ```
#[must_use]
pub fn partition(sections: &[SectionWeight]) -> Partition {
    partition_with_threshold(sections, EXHAUSTIVE_MAX_SECTIONS)
}

/// Partitions sections, searching exhaustively up to `exhaustive_max`
/// sections and greedily above it.
#[must_use]
pub fn partition_with_threshold(sections: &[SectionWeight], exhaustive_max: usize) -> Partition {
    let in_left = if sections.len() <= exhaustive_max {
        debug!(sections = sections.len(), "Partitioning sections exhaustively");
        exhaustive(sections)
    } else {
        debug!(sections = sections.len(), "Partitioning sections greedily");
        greedy(sections)
    };

    let mut result = Partition::default();
    for (section, left) in sections.iter().zip(in_left) {
        if left {
            result.left.push(section.index);
        } else {
            result.right.push(section.index);
        }
    }

    // Membership is what matters; columns always render in template order
    result.left.sort_unstable();
    result.right.sort_unstable();
    result
}

/// Depth-first search state for the exact partition.
struct Search<'a> {
    weights: &'a [usize],
    /// `remaining[i]` is the total of sections `i..`
    remaining: Vec<usize>,
    current: Vec<bool>,
    best: Vec<bool>,
    best_diff: usize,
}

impl Search<'_> {
    fn visit(&mut self, i: usize, left_sum: usize, right_sum: usize) {
        let diff = left_sum.abs_diff(right_sum);

        if i == self.weights.len() {
            if diff < self.best_diff {
                self.best_diff = diff;
                self.best.clone_from(&self.current);
            }
            return;
        }

        // Nothing beats a perfect split, and no completion of this branch
        // can get below `diff - remaining`.
        if self.best_diff == 0 || diff > self.best_diff.saturating_add(self.remaining[i]) {
            return;
        }

        let weight = self.weights[i];

        self.current[i] = true;
        self.visit(i + 1, left_sum.saturating_add(weight), right_sum);

        self.current[i] = false;
        self.visit(i + 1, left_sum, right_sum.saturating_add(weight));
    }
}

fn exhaustive(sections: &[SectionWeight]) -> Vec<bool> {
    let weights: Vec<usize> = sections.iter().map(|s| s.item_count).collect();

    let mut remaining = vec![0usize; weights.len() + 1];
    for i in (0..weights.len()).rev() {
        remaining[i] = remaining[i + 1].saturating_add(weights[i]);
    }

    let mut search = Search {
        weights: &weights,
        remaining,
        current: vec![false; weights.len()],
        best: vec![true; weights.len()],
        best_diff: usize::MAX,
    };
    search.visit(0, 0, 0);
    search.best
}

fn greedy(sections: &[SectionWeight]) -> Vec<bool> {
    let mut left_sum: usize = 0;
    let mut right_sum: usize = 0;

    sections
        .iter()
        .map(|section| {
            if left_sum <= right_sum {
                left_sum = left_sum.saturating_add(section.item_count);
                true
            } else {
                right_sum = right_sum.saturating_add(section.item_count);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(counts: &[usize]) -> Vec<SectionWeight> {
        counts
            .iter()
            .enumerate()
            .map(|(index, count)| SectionWeight::new(index, *count))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let result = partition(&[]);
        assert!(result.left.is_empty());
        assert!(result.right.is_empty());
    }

    #[test]
    fn test_single_section_goes_left() {
        let result = partition(&weights(&[40]));
        assert_eq!(result.left, vec![0]);
        assert!(result.right.is_empty());
    }

    #[test]
    fn test_left_biased_tie_break() {
        // [7 | 3 5] and [3 5 | 7] are equally good; left-first search finds
        // section 0 alone on the left first
        let result = partition(&weights(&[7, 3, 5]));
        assert_eq!(result.left, vec![0]);
        assert_eq!(result.right, vec![1, 2]);
    }

    #[test]
    fn test_perfect_split_found() {
        let sections = weights(&[4, 1, 1, 2, 4]);
        let result = partition(&sections);
        assert_eq!(result.imbalance(&sections), 0);
        assert_eq!(result.left, vec![0, 1, 2]);
        assert_eq!(result.right, vec![3, 4]);
    }

    #[test]
    fn test_pruning_keeps_optimum() {
        // A large head with many small tails: the naive "largest remaining"
        // bound would cut the only optimal branch
        let sections = weights(&[5, 2, 2, 2]);
        let result = partition(&sections);
        assert_eq!(result.imbalance(&sections), 1);
    }

    #[test]
    fn test_greedy_above_threshold() {
        let sections = weights(&[3; 12]);
        let result = partition(&sections);
        assert_eq!(result.left, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(result.right, vec![1, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn test_custom_threshold_forces_greedy() {
        // Greedy puts 7 left, 3 right, 5 right: same membership as exact here
        let sections = weights(&[7, 3, 5]);
        let result = partition_with_threshold(&sections, 0);
        assert_eq!(result.left, vec![0]);
        assert_eq!(result.right, vec![1, 2]);

        let sections = weights(&[1, 1, 2]);
        let greedy = partition_with_threshold(&sections, 0);
        assert_eq!(greedy.imbalance(&sections), 2);
        assert_eq!(partition(&sections).imbalance(&sections), 0);
    }

    #[test]
    fn test_non_contiguous_indices_sorted() {
        let sections = vec![
            SectionWeight::new(4, 1),
            SectionWeight::new(9, 6),
            SectionWeight::new(2, 5),
        ];
        let result = partition(&sections);
        assert_eq!(result.imbalance(&sections), 0);
        assert_eq!(result.left, vec![2, 4]);
        assert_eq!(result.right, vec![9]);
    }

    #[test]
    fn test_huge_sections_saturate() {
        let sections = [SectionWeight::new(0, usize::MAX), SectionWeight::new(1, usize::MAX)];

        for threshold in [EXHAUSTIVE_MAX_SECTIONS, 0] {
            let result = partition_with_threshold(&sections, threshold);
            assert_eq!(result.left, vec![0]);
            assert_eq!(result.right, vec![1]);
            assert_eq!(result.imbalance(&sections), 0);
        }
    }
}
