//! Catalog of stampable live-cell templates.
//!
//! Offsets are `(row_offset, column_offset)` pairs relative to the stamp anchor,
//! so a pattern may extend left of or above the anchor.

/// A named template of live-cell offsets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: &'static [(isize, isize)],
}

/// Inclusive extent of a pattern's offsets around its anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternBounds {
    pub min_row: isize,
    pub max_row: isize,
    pub min_column: isize,
    pub max_column: isize,
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        offsets: &'static [(isize, isize)],
    ) -> Self {
        Self { name, description, offsets }
    }

    /// Number of live cells the pattern stamps
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Bounding box of the offsets, `None` for an empty pattern
    pub fn bounds(&self) -> Option<PatternBounds> {
        let (&(row, column), rest) = self.offsets.split_first()?;
        let start = PatternBounds {
            min_row: row,
            max_row: row,
            min_column: column,
            max_column: column,
        };
        Some(rest.iter().fold(start, |b, &(row, column)| PatternBounds {
            min_row: b.min_row.min(row),
            max_row: b.max_row.max(row),
            min_column: b.min_column.min(column),
            max_column: b.max_column.max(column),
        }))
    }

    /// Absolute `(column, row)` positions when stamped at the given anchor.
    /// Saturates instead of overflowing so extreme anchors stay off the board.
    pub fn cells_at(&self, anchor_column: isize, anchor_row: isize) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.offsets
            .iter()
            .map(move |&(row, column)| {
                (anchor_column.saturating_add(column), anchor_row.saturating_add(row))
            })
    }
}

/// Classic patterns, `(row, column)` offsets
pub mod presets {
    use super::Pattern;

    /// Blinker - horizontal line of three, period 2 oscillator
    pub const BLINKER: Pattern = Pattern::new(
        "Blinker",
        "Oscillator (period 2)",
        &[(0, 0), (0, 1), (0, 2)],
    );

    /// Glider - moves one cell down and right every 4 generations
    pub const GLIDER: Pattern = Pattern::new(
        "Glider",
        "Spaceship (period 4)",
        &[(0, 0), (1, 1), (2, 1), (2, 0), (2, -1)],
    );

    pub const BLOCK: Pattern = Pattern::new(
        "Block",
        "Still life",
        &[(0, 0), (0, 1), (1, 0), (1, 1)],
    );

    pub const TOAD: Pattern = Pattern::new(
        "Toad",
        "Oscillator (period 2)",
        &[
            (0, 1), (0, 2), (0, 3),
            (1, 0), (1, 1), (1, 2),
        ],
    );

    pub const BEACON: Pattern = Pattern::new(
        "Beacon",
        "Oscillator (period 2)",
        &[
            (0, 0), (0, 1),
            (1, 0),
            (2, 3),
            (3, 2), (3, 3),
        ],
    );

    /// Lightweight Spaceship, travels left
    pub const LWSS: Pattern = Pattern::new(
        "LWSS",
        "Lightweight Spaceship (period 4)",
        &[
            (0, 1), (0, 4),
            (1, 0),
            (2, 0), (2, 4),
            (3, 0), (3, 1), (3, 2), (3, 3),
        ],
    );

    /// Scroll order: the original two first, then the extras
    pub const ALL: &[Pattern] = &[BLINKER, GLIDER, BLOCK, TOAD, BEACON, LWSS];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_bounds_extend_left_of_anchor() {
        let bounds = presets::GLIDER.bounds().unwrap();
        assert_eq!(bounds.min_row, 0);
        assert_eq!(bounds.max_row, 2);
        assert_eq!(bounds.min_column, -1);
        assert_eq!(bounds.max_column, 1);
    }

    #[test]
    fn test_empty_pattern_has_no_bounds() {
        let empty = Pattern::new("Empty", "", &[]);
        assert!(empty.is_empty());
        assert_eq!(empty.bounds(), None);
    }

    #[test]
    fn test_cells_at_swaps_to_column_row() {
        let cells: Vec<_> = presets::BLINKER.cells_at(5, 7).collect();
        assert_eq!(cells, vec![(5, 7), (6, 7), (7, 7)]);
    }

    #[test]
    fn test_preset_offsets_are_unique() {
        for pattern in presets::ALL {
            let mut offsets = pattern.offsets.to_vec();
            offsets.sort();
            offsets.dedup();
            assert_eq!(offsets.len(), pattern.len(), "{}", pattern.name);
        }
    }
}
