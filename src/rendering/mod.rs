use macroquad::prelude::*;

use crate::application::SimulationConfig;
use crate::domain::Grid;

/// Draw live cells as filled rectangles over a black background.
/// Cells beyond the current surface are simply clipped.
pub fn draw_grid(grid: &Grid, config: &SimulationConfig) {
    clear_background(BLACK);

    grid.cell_state()
        .filter(|&(_, _, alive)| alive)
        .for_each(|(column, row, _)| {
            draw_rectangle(
                column as f32 * config.cell_width,
                row as f32 * config.cell_height,
                config.cell_width,
                config.cell_height,
                WHITE,
            );
        });
}
