/// StepClock throttles generation advances relative to the host loop.
///
/// It is a pure iteration counter, not a wall-clock timer: `tick` fires
/// once every `divisor + 1` calls, so the real time per generation is set
/// by the host loop's frame delay. The caller only ticks the clock while
/// the simulation is running, which is what freezes it during editing and
/// pause.
#[derive(Clone, Copy, Debug)]
pub struct StepClock {
    counter: u32,
    divisor: u32,
}

impl StepClock {
    pub fn new(divisor: u32) -> Self {
        Self {
            counter: 0,
            divisor,
        }
    }

    /// Count one host-loop iteration. Returns true when a generation is
    /// due, resetting the counter.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter > self.divisor {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    /// Restart the current interval.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
