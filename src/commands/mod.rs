//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use rank::{RankEntry, RankResult, rank_words};
pub use simple::{pick_target, play_round, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_word};
