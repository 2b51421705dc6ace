use super::StepClock;
use crate::domain::{Cell, Engine, Grid};

/// Where the simulation is in its lifecycle.
///
/// Modeled as an explicit state machine instead of started/paused flags so
/// that the phase rules are enforced in one place: painting and reset act
/// only in `Editing`, and `Paused` is reachable only from `Running`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// Cells can be painted; the engine is idle.
    #[default]
    Editing,
    /// Generations advance on the clock's cadence.
    Running,
    /// A started run, suspended. Neither advancing nor redrawing happens.
    Paused,
}

/// SimState orchestrates the simulation: it owns the grid, the engine's
/// swap buffer, the step clock, and the current phase.
pub struct SimState {
    pub grid: Grid,
    engine: Engine,
    clock: StepClock,
    pub phase: Phase,
    pub generation: u64,
}

impl SimState {
    /// Create a simulation over an all-dead `width x height` grid that
    /// advances once every `speed_divisor + 1` host-loop iterations.
    pub fn new(width: usize, height: usize, speed_divisor: u32) -> Self {
        Self {
            grid: Grid::new(width, height),
            engine: Engine::new(),
            clock: StepClock::new(speed_divisor),
            phase: Phase::default(),
            generation: 0,
        }
    }

    /// Leave editing and let the simulation run. A latch: pressing start
    /// again while running or paused changes nothing.
    pub fn start(mut self) -> Self {
        if self.phase == Phase::Editing {
            self.phase = Phase::Running;
        }
        self
    }

    /// End the run and return to editing. The grid keeps its cells so the
    /// last configuration can be edited further.
    pub fn stop(mut self) -> Self {
        self.phase = Phase::Editing;
        self.clock.reset();
        self
    }

    /// Suspend or resume a started run. Does nothing while editing.
    pub fn toggle_pause(mut self) -> Self {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Editing => Phase::Editing,
        };
        self
    }

    /// Clear the board and the generation counter. Only honored while
    /// editing; once a run has started reset is ignored.
    pub fn reset(mut self) -> Self {
        if self.phase == Phase::Editing {
            self.grid.clear();
            self.generation = 0;
            self.clock.reset();
        }
        self
    }

    /// Paint one cell. Ignored outside editing, so a running simulation can
    /// never drift away from what the user sees painted.
    pub fn paint(&mut self, x: usize, y: usize, cell: Cell) {
        if self.phase == Phase::Editing {
            self.grid.set(x, y, cell);
        }
    }

    /// Advance one host-loop iteration: while running, count it on the
    /// clock and evolve the grid by one generation when the clock fires.
    pub fn tick(mut self) -> Self {
        if self.phase == Phase::Running && self.clock.tick() {
            self.engine.advance(&mut self.grid);
            self.generation += 1;
        }
        self
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }
}
