mod cell;
mod error;
mod grid;
mod library;
mod patterns;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::Grid;
pub use library::{PatternLibrary, ScrollDirection};
pub use patterns::{Pattern, PatternBounds, presets};
