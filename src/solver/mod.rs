//! The guessing engine
//!
//! Candidates live in an arena, the scorer ranks them by letter overlap,
//! the filter removes those contradicted by feedback, and a round ties the
//! pieces together for one target.

mod candidates;
pub mod filter;
mod round;
pub mod scorer;

pub use candidates::{Candidate, CandidateSet, Status};
pub use round::{DEFAULT_OPENER, GuessStep, Phase, Round, SolveError, default_opener, solve};
