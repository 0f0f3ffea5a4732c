//! Row and column striping.

use serde::{Deserialize, Serialize};

use crate::models::{Color, StyleSet};

/// Background colors of one rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StripeColors {
    /// Background of the specification name cell
    pub name_cell: Color,
    /// Background of the value cell
    pub value_cell: Color,
}

/// Resolves the cell backgrounds for a row.
///
/// `visible_row_index` is the 0-based position of the row among the rows
/// actually rendered in its column, after pagination and partitioning. Row
/// numbering for striping starts at one, so index 0 is an odd row.
///
/// Column striping takes precedence over row striping. The editor keeps the
/// two exclusive, so both being set only happens in hand-edited data.
#[must_use]
pub fn stripe_for(style: &StyleSet, visible_row_index: usize) -> StripeColors {
    if style.column_striping_enabled {
        return StripeColors {
            name_cell: style.odd_column_color.clone(),
            value_cell: style.even_column_color.clone(),
        };
    }

    if style.row_striping_enabled {
        let color = if visible_row_index % 2 == 0 {
            &style.odd_row_color
        } else {
            &style.even_row_color
        };
        return StripeColors {
            name_cell: color.clone(),
            value_cell: color.clone(),
        };
    }

    StripeColors {
        name_cell: style.cell_background_color.clone(),
        value_cell: style.cell_background_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped_style() -> StyleSet {
        StyleSet {
            odd_row_color: Color::rgb(1, 1, 1),
            even_row_color: Color::rgb(2, 2, 2),
            odd_column_color: Color::rgb(3, 3, 3),
            even_column_color: Color::rgb(4, 4, 4),
            cell_background_color: Color::rgb(5, 5, 5),
            ..StyleSet::default()
        }
    }

    #[test]
    fn test_no_striping_uses_flat_background() {
        let style = striped_style();
        for index in 0..4 {
            let stripe = stripe_for(&style, index);
            assert_eq!(stripe.name_cell, Color::rgb(5, 5, 5));
            assert_eq!(stripe.value_cell, Color::rgb(5, 5, 5));
        }
    }

    #[test]
    fn test_row_striping_alternates_from_odd() {
        let mut style = striped_style();
        style.set_row_striping(true);

        assert_eq!(stripe_for(&style, 0).name_cell, Color::rgb(1, 1, 1));
        assert_eq!(stripe_for(&style, 0).value_cell, Color::rgb(1, 1, 1));
        assert_eq!(stripe_for(&style, 1).name_cell, Color::rgb(2, 2, 2));
        assert_eq!(stripe_for(&style, 2).value_cell, Color::rgb(1, 1, 1));
    }

    #[test]
    fn test_column_striping_is_constant_across_rows() {
        let mut style = striped_style();
        style.set_column_striping(true);

        for index in 0..3 {
            let stripe = stripe_for(&style, index);
            assert_eq!(stripe.name_cell, Color::rgb(3, 3, 3));
            assert_eq!(stripe.value_cell, Color::rgb(4, 4, 4));
        }
    }

    #[test]
    fn test_column_mode_wins_on_conflicting_data() {
        let style = StyleSet {
            row_striping_enabled: true,
            column_striping_enabled: true,
            ..striped_style()
        };
        assert_eq!(stripe_for(&style, 1).name_cell, Color::rgb(3, 3, 3));
    }
}
