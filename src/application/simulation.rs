use macroquad::logging::info;
use rand::{SeedableRng, rngs::StdRng};

use super::SimulationConfig;
use crate::domain::{Grid, LifeError, Pattern};

/// Simulation drives the grid at a fixed cadence.
/// Frame time is accumulated and a generation runs once the step interval has elapsed.
pub struct Simulation {
    pub grid: Grid,
    pub generation: u64,
    pub step_timer: f32,
    pub step_interval: f32,
    /// Duration of the last generation, for diagnostics
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Build a randomly seeded grid of the given size
    pub fn new(columns: usize, rows: usize, config: &SimulationConfig) -> Result<Self, LifeError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = Grid::random(columns, rows, config.alive_probability, &mut rng)?;
        info!(
            "simulation {}x{} started with {} live cells (seed: {:?})",
            columns,
            rows,
            grid.population(),
            config.seed
        );
        Ok(Self::from_grid(grid, config.step_interval))
    }

    /// Wrap an existing grid, e.g. one prepared by hand
    pub fn from_grid(grid: Grid, step_interval: f32) -> Self {
        Self {
            grid,
            generation: 0,
            step_timer: 0.0,
            step_interval,
            last_step_time_ms: 0.0,
        }
    }

    /// Advance one generation immediately
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Update by one frame. Returns whether a generation ran,
    /// at most one per call however long the frame took.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.step_timer += delta_time;
        if self.step_timer < self.step_interval {
            return false;
        }
        self.step();
        self.step_timer = 0.0;
        true
    }

    pub fn stamp(&mut self, column: isize, row: isize, pattern: &Pattern) -> Result<(), LifeError> {
        self.grid.stamp_pattern(column, row, pattern)
    }
}
