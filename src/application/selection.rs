use macroquad::logging::info;

use crate::domain::{LifeError, Pattern, PatternLibrary, ScrollDirection};

/// Currently selected pattern, owned by whoever handles input.
/// Starts at the first pattern of the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternSelector {
    index: usize,
}

impl PatternSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move the selection one step, wrapping at both ends
    pub fn scroll(&mut self, direction: ScrollDirection, library: &PatternLibrary) {
        self.index = library.step_index(self.index, direction);
        if let Ok(pattern) = library.pattern_at(self.index) {
            info!("selected pattern {} ({})", self.index, pattern.name);
        }
    }

    pub fn current(&self, library: &PatternLibrary) -> Result<&'static Pattern, LifeError> {
        library.pattern_at(self.index)
    }
}
