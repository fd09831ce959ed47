//! Route handlers.

pub mod compare;
pub mod matches;
pub mod players;
