mod clock;
mod sim_state;

pub use clock::StepClock;
pub use sim_state::{Phase, SimState};
