//! Terminal output formatting
//!
//! Display utilities for rounds, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_exhausted, print_rank_result, print_round_header,
    print_solve_result, print_step,
};
