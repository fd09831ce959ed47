use std::sync::Arc;

use crate::storage::StorageConfig;

/// Shared handler state. The corpus itself is re-read from JSONL per
/// request; derived statistics hold no server-side state.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
}

impl AppState {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}
