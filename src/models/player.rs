//! Player reference entity.
//!
//! Players are immutable reference data owned by the external player
//! directory; the core never creates or mutates them, it only links
//! match participants to them.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player known to the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Directory-assigned numeric identifier
    pub id: PlayerId,

    /// Full name
    pub name: String,

    /// Optional avatar reference (URL or asset key)
    pub avatar: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            avatar: None,
        }
    }

    /// Builder method to set the avatar reference.
    pub fn with_avatar(mut self, avatar: String) -> Self {
        self.avatar = Some(avatar);
        self
    }
}
