use std::process;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use macroquad::prelude::*;

use life_canvas::{Config, SimState, input, rendering};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Resolve the startup configuration once. macroquad calls `window_conf`
/// before `main`, so both read through this.
fn config() -> &'static Config {
    CONFIG.get_or_init(|| match Config::load(Config::DEFAULT_PATH) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {err}", Config::DEFAULT_PATH);
            process::exit(1);
        }
    })
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

fn print_instructions() {
    println!("Conway's Game of Life");
    println!("  left mouse   paint a cell alive (while editing)");
    println!("  right mouse  erase a cell");
    println!("  space        start the simulation");
    println!("  e            end the run, back to editing");
    println!("  p            pause / resume");
    println!("  r            clear the board (while editing)");
    println!("  esc          quit");
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    print_instructions();
    info!(
        "{}x{} cells at {}px, one generation per {} frames",
        config.cols(),
        config.rows(),
        config.cell_size,
        config.speed_divisor + 1
    );

    let mut state = SimState::new(config.cols(), config.rows(), config.speed_divisor);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // All of this iteration's input lands before the engine runs, so an
        // advance always sees the fully applied post-input grid.
        let mouse_pos = mouse_position();
        input::handle_mouse_paint(&mut state, config, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick();

        // Pause suspends redrawing as well; the last frame stays up.
        if !state.is_paused() {
            rendering::draw_frame(&state, config);
        }

        // Deliberate frame-rate cap. Generation cadence is iterations, not
        // wall time, so this also sets the real speed of the simulation.
        thread::sleep(Duration::from_millis(config.frame_delay_ms));
        next_frame().await;
    }
}
