//! Filesystem operations for the match corpus.
//!
//! JSONL files under the data directory are the source of truth for raw
//! match and player records. Derived statistics are never written back;
//! they are recomputed from the corpus on every request.

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;

pub use jsonl::*;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn normalized_dir(&self) -> PathBuf {
        self.data_dir.join("normalized")
    }

    pub fn matches_path(&self) -> PathBuf {
        self.normalized_dir().join("matches.jsonl")
    }

    pub fn players_path(&self) -> PathBuf {
        self.normalized_dir().join("players.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
