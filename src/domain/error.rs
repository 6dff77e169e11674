use thiserror::Error;

/// Errors raised by the grid engine and the pattern library.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LifeError {
    /// Grid construction with a zero column or row count
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimension { columns: usize, rows: usize },

    /// Alive probability outside [0, 1]
    #[error("alive probability {0} is not within [0, 1]")]
    InvalidProbability(f64),

    /// A stamp or write would touch a cell outside the grid
    #[error("cell ({column}, {row}) is outside the grid")]
    OutOfBounds { column: isize, row: isize },

    /// Pattern lookup past the end of the catalog
    #[error("pattern index {index} out of range for {count} patterns")]
    IndexOutOfRange { index: usize, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = LifeError::OutOfBounds { column: -1, row: 7 };
        assert_eq!(err.to_string(), "cell (-1, 7) is outside the grid");

        let err = LifeError::IndexOutOfRange { index: 4, count: 2 };
        assert_eq!(err.to_string(), "pattern index 4 out of range for 2 patterns");
    }
}
