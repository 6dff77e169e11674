mod config;
mod selection;
mod simulation;

pub use config::SimulationConfig;
pub use selection::PatternSelector;
pub use simulation::Simulation;
