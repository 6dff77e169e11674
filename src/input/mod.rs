use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::application::{PatternSelector, Simulation, SimulationConfig};
use crate::domain::{LifeError, PatternLibrary, ScrollDirection};

/// Convert a pixel position to the nearest grid coordinate
pub fn pixel_to_grid(x: f32, y: f32, cell_width: f32, cell_height: f32) -> (isize, isize) {
    ((x / cell_width).round() as isize, (y / cell_height).round() as isize)
}

/// Wheel movement to selection direction; wheel-down moves forward.
/// No movement yields `None`.
pub fn scroll_direction(wheel_y: f32) -> Option<ScrollDirection> {
    if wheel_y < 0.0 {
        Some(ScrollDirection::Forward)
    } else if wheel_y > 0.0 {
        Some(ScrollDirection::Backward)
    } else {
        None
    }
}

/// Stamp the selected pattern at the grid position under `pixel`
pub fn apply_click(
    simulation: &mut Simulation,
    selector: &PatternSelector,
    library: &PatternLibrary,
    config: &SimulationConfig,
    pixel: (f32, f32),
) -> Result<(), LifeError> {
    let (column, row) = pixel_to_grid(pixel.0, pixel.1, config.cell_width, config.cell_height);
    let pattern = selector.current(library)?;
    simulation.stamp(column, row, pattern)
}

/// Handle left clicks on the surface
pub fn handle_click(
    simulation: &mut Simulation,
    selector: &PatternSelector,
    library: &PatternLibrary,
    config: &SimulationConfig,
) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Err(err) = apply_click(simulation, selector, library, config, mouse_position()) {
        warn!("stamp rejected: {}", err);
    }
}

/// Handle pattern cycling with mouse wheel
pub fn handle_scroll(selector: &mut PatternSelector, library: &PatternLibrary) {
    if let Some(direction) = scroll_direction(mouse_wheel().1) {
        selector.scroll(direction, library);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grid, presets};

    fn empty_simulation(columns: usize, rows: usize) -> Simulation {
        Simulation::from_grid(Grid::new(columns, rows).unwrap(), 0.1)
    }

    #[test]
    fn test_pixel_to_grid_rounds() {
        assert_eq!(pixel_to_grid(0.0, 0.0, 10.0, 10.0), (0, 0));
        assert_eq!(pixel_to_grid(54.0, 55.0, 10.0, 10.0), (5, 6));
        assert_eq!(pixel_to_grid(44.9, 45.1, 10.0, 10.0), (4, 5));
    }

    #[test]
    fn test_pixel_to_grid_uses_cell_height_for_rows() {
        assert_eq!(pixel_to_grid(40.0, 40.0, 10.0, 20.0), (4, 2));
    }

    #[test]
    fn test_scroll_direction() {
        assert_eq!(scroll_direction(-1.0), Some(ScrollDirection::Forward));
        assert_eq!(scroll_direction(1.0), Some(ScrollDirection::Backward));
        assert_eq!(scroll_direction(0.0), None);
    }

    #[test]
    fn test_click_stamps_selected_pattern() {
        let library = PatternLibrary::standard();
        let config = SimulationConfig::default();
        let mut selector = PatternSelector::new();
        selector.scroll(ScrollDirection::Forward, &library);
        let mut sim = empty_simulation(30, 30);

        apply_click(&mut sim, &selector, &library, &config, (101.0, 99.0)).unwrap();

        let mut expected = Grid::new(30, 30).unwrap();
        expected.stamp_pattern(10, 10, &presets::GLIDER).unwrap();
        assert_eq!(sim.grid, expected);
    }

    #[test]
    fn test_click_near_edge_is_rejected() {
        let library = PatternLibrary::standard();
        let config = SimulationConfig::default();
        let selector = PatternSelector::new();
        let mut sim = empty_simulation(10, 10);

        let result = apply_click(&mut sim, &selector, &library, &config, (90.0, 10.0));
        assert_eq!(result, Err(LifeError::OutOfBounds { column: 10, row: 1 }));
        assert_eq!(sim.grid.population(), 0);
    }
}
