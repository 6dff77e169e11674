use super::{LifeError, Pattern, presets};

/// Wheel direction over the pattern catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Read-only, indexable pattern catalog.
/// Index arithmetic wraps at both ends so selection can never leave the catalog.
#[derive(Clone, Copy, Debug)]
pub struct PatternLibrary {
    patterns: &'static [Pattern],
}

impl PatternLibrary {
    pub const fn new(patterns: &'static [Pattern]) -> Self {
        Self { patterns }
    }

    /// Blinker, glider, then the remaining presets
    pub const fn standard() -> Self {
        Self::new(presets::ALL)
    }

    pub const fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern_at(&self, index: usize) -> Result<&'static Pattern, LifeError> {
        self.patterns.get(index).ok_or(LifeError::IndexOutOfRange {
            index,
            count: self.patterns.len(),
        })
    }

    /// Following index, wrapping to 0 after the last
    pub const fn next_index(&self, current: usize) -> usize {
        let count = self.patterns.len();
        if current.saturating_add(1) >= count { 0 } else { current + 1 }
    }

    /// Preceding index, wrapping to the last after 0
    pub const fn previous_index(&self, current: usize) -> usize {
        let count = self.patterns.len();
        if count == 0 {
            0
        } else if current == 0 || current > count {
            count - 1
        } else {
            current - 1
        }
    }

    pub const fn step_index(&self, current: usize, direction: ScrollDirection) -> usize {
        match direction {
            ScrollDirection::Forward => self.next_index(current),
            ScrollDirection::Backward => self.previous_index(current),
        }
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: PatternLibrary = PatternLibrary::new(&[presets::BLINKER, presets::GLIDER]);

    #[test]
    fn test_two_pattern_cycle() {
        assert_eq!(PAIR.pattern_count(), 2);
        assert_eq!(PAIR.next_index(0), 1);
        assert_eq!(PAIR.next_index(1), 0);
        assert_eq!(PAIR.previous_index(0), 1);
        assert_eq!(PAIR.previous_index(1), 0);
    }

    #[test]
    fn test_standard_starts_with_blinker_and_glider() {
        let library = PatternLibrary::standard();
        assert!(library.pattern_count() >= 2);
        assert_eq!(library.pattern_at(0).unwrap().name, "Blinker");
        assert_eq!(library.pattern_at(1).unwrap().name, "Glider");
    }

    #[test]
    fn test_pattern_at_out_of_range() {
        let library = PatternLibrary::standard();
        let count = library.pattern_count();
        assert_eq!(
            library.pattern_at(count),
            Err(LifeError::IndexOutOfRange { index: count, count })
        );
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let library = PatternLibrary::standard();
        let mut forward = 0;
        let mut backward = 0;
        for _ in 0..library.pattern_count() {
            forward = library.step_index(forward, ScrollDirection::Forward);
            backward = library.step_index(backward, ScrollDirection::Backward);
            assert!(forward < library.pattern_count());
            assert!(backward < library.pattern_count());
        }
        assert_eq!(forward, 0);
        assert_eq!(backward, 0);
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let library = PatternLibrary::standard();
        for index in 0..library.pattern_count() {
            assert_eq!(library.previous_index(library.next_index(index)), index);
        }
    }

    #[test]
    fn test_empty_library_indexes_stay_at_zero() {
        let empty = PatternLibrary::new(&[]);
        assert_eq!(empty.next_index(0), 0);
        assert_eq!(empty.previous_index(0), 0);
        assert!(empty.pattern_at(0).is_err());
    }
}
