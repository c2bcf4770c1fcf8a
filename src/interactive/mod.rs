//! Interactive TUI: watch the guesser work through a round step by step

mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
