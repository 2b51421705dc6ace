// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Run-state coordination
pub mod application;

// Infrastructure layer - Configuration, input, rendering
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{Phase, SimState};
pub use config::Config;
pub use domain::{Cell, Engine, Grid};
