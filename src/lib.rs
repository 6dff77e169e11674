// Domain layer - grid engine and pattern catalog
pub mod domain;

// Application layer - stepping cadence, selection and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Pattern, PatternLibrary, ScrollDirection, presets};
pub use application::{PatternSelector, Simulation, SimulationConfig};
