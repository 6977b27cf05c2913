//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_stats, print_solve_result};
pub use formatters::{format_average, render_guess};
