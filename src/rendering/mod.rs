use macroquad::prelude::*;

use crate::application::{Phase, SimState};
use crate::config::Config;
use crate::domain::Grid;

/// Draw one full frame: background, live cells, gridlines, status line.
pub fn draw_frame(state: &SimState, config: &Config) {
    clear_background(WHITE);
    draw_cells(&state.grid, config);
    draw_gridlines(config);
    draw_status(state);
}

/// Fill every live cell as a solid square.
fn draw_cells(grid: &Grid, config: &Config) {
    let cell = config.cell_size as f32;
    let cell_color = Color::from_rgba(25, 25, 25, 255);

    for (x, y, c) in grid.iter_cells() {
        if c.is_alive() {
            draw_rectangle(x as f32 * cell, y as f32 * cell, cell, cell, cell_color);
        }
    }
}

/// Draw the gridlines over the cells, one bar per row and column boundary.
fn draw_gridlines(config: &Config) {
    let cell = config.cell_size as f32;
    let line = config.gridline_width as f32;
    let width = config.window_width as f32;
    let height = config.window_height as f32;
    let line_color = Color::from_rgba(176, 176, 176, 255);

    for row in 0..=config.rows() {
        draw_rectangle(0.0, row as f32 * cell, width, line, line_color);
    }
    for col in 0..=config.cols() {
        draw_rectangle(col as f32 * cell, 0.0, line, height, line_color);
    }
}

/// One-line overlay with the phase, generation count, and population.
fn draw_status(state: &SimState) {
    let phase = match state.phase {
        Phase::Editing => "editing",
        Phase::Running => "running",
        Phase::Paused => "paused",
    };
    let status = format!(
        "{} | gen {} | {} alive",
        phase,
        state.generation,
        state.grid.population()
    );
    draw_text(&status, 8.0, 20.0, 20.0, DARKGRAY);
}
