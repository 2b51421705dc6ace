use macroquad::prelude::*;

use crate::application::SimState;
use crate::config::Config;
use crate::domain::Cell;

/// Map a pointer position in viewport pixels to a grid cell by truncating
/// division. Positions left of or above the viewport, and positions over
/// the partial-cell margin past the last full row or column, map to `None`.
pub fn cell_under_pointer(
    pos: (f32, f32),
    cell_size: f32,
    grid_dims: (usize, usize),
) -> Option<(usize, usize)> {
    let (px, py) = pos;
    if px < 0.0 || py < 0.0 {
        return None;
    }
    let x = (px / cell_size) as usize;
    let y = (py / cell_size) as usize;
    let (cols, rows) = grid_dims;
    (x < cols && y < rows).then_some((x, y))
}

/// Paint with the mouse while editing: the left button sets the cell under
/// the pointer alive, the right or middle button sets it dead. Runs every
/// host-loop poll, so holding a button and dragging paints a stroke at the
/// poll rate (fast motion can skip cells between polls).
pub fn handle_mouse_paint(state: &mut SimState, config: &Config, mouse_pos: (f32, f32)) {
    if !state.is_editing() {
        return;
    }

    let brush = if is_mouse_button_down(MouseButton::Left) {
        Cell::Alive
    } else if is_mouse_button_down(MouseButton::Right) || is_mouse_button_down(MouseButton::Middle)
    {
        Cell::Dead
    } else {
        return;
    };

    if let Some((x, y)) =
        cell_under_pointer(mouse_pos, config.cell_size as f32, state.grid.dimensions())
    {
        state.paint(x, y, brush);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: SimState) -> SimState {
    type KeyAction = (KeyCode, fn(SimState) -> SimState);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, SimState::start),
        (KeyCode::E, SimState::stop),
        (KeyCode::P, SimState::toggle_pause),
        (KeyCode::R, SimState::reset),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
