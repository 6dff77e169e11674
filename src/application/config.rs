/// Tunables shared by the simulation, input mapping and rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Cell width in pixels
    pub cell_width: f32,
    /// Cell height in pixels
    pub cell_height: f32,
    /// Chance that a cell starts alive
    pub alive_probability: f64,
    /// Seconds between generations
    pub step_interval: f32,
    /// Fixed seed for a reproducible start; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Grid size covering a surface, rounding partial cells up.
    /// Never smaller than 1x1.
    pub fn grid_dimensions(&self, surface_width: f32, surface_height: f32) -> (usize, usize) {
        let columns = (surface_width / self.cell_width).ceil().max(1.0) as usize;
        let rows = (surface_height / self.cell_height).ceil().max(1.0) as usize;
        (columns, rows)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_width: 10.0,
            cell_height: 10.0,
            alive_probability: 0.08,
            step_interval: 0.1,
            seed: None,
        }
    }
}
