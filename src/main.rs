use macroquad::logging::error;
use macroquad::prelude::*;
use life_stamp::{
    PatternLibrary, PatternSelector, Simulation, SimulationConfig,
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - click to stamp, scroll to change pattern".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SimulationConfig::default();
    let library = PatternLibrary::standard();
    let mut selector = PatternSelector::new();

    // Grid size is fixed from the surface at startup; later resizes only clip drawing
    let (columns, rows) = config.grid_dimensions(screen_width(), screen_height());
    let mut simulation = match Simulation::new(columns, rows, &config) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("failed to start simulation: {}", err);
            return;
        }
    };

    loop {
        input::handle_scroll(&mut selector, &library);
        input::handle_click(&mut simulation, &selector, &library, &config);

        simulation.tick(get_frame_time());

        rendering::draw_grid(&simulation.grid, &config);

        next_frame().await;
    }
}
