//! # Courtside
//!
//! A local tennis match tracker with on-demand statistics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, players, technical stats)
//! - **calculate**: Derived statistics, head-to-head, and comparison engine
//! - **storage**: JSONL match corpus on the local filesystem
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation
//!
//! All derived statistics are pure functions of the match corpus: they are
//! recomputed on every request and never stored.

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
