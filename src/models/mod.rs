//! Core data models for the match tracker.

mod ids;
mod match_record;
mod player;
mod stats;
mod technical;

pub use ids::*;
pub use match_record::*;
pub use player::*;
pub use stats::*;
pub use technical::*;
