//! Command implementations

pub mod auto;
pub mod play;
pub mod simulate;
pub mod solve;

pub use auto::run_auto;
pub use play::run_play;
pub use simulate::{GameRecord, SimulationConfig, SimulationStats, run_simulation};
pub use solve::{GuessStep, SolveResult, solve_word};
