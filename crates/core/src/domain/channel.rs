// Channel Domain Model

use serde::{Deserialize, Serialize};

/// Channel ID (surrogate key, assigned by the storage layer on insert)
pub type ChannelId = i64;

/// Upper bound on channel name length, enforced by the storage layer
pub const CHANNEL_NAME_MAX_LEN: usize = 100;

/// A persisted channel record.
///
/// Only the repository produces values of this type; the id is immutable
/// once assigned. Names are not unique across channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: ChannelId,
    pub channel_name: String,

    pub created_at: i64, // epoch ms
    pub updated_at: i64,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Channel id={} name={:?}>",
            self.channel_id, self.channel_name
        )
    }
}

/// An unpersisted channel.
///
/// Fields are enumerated explicitly; there is no generic attribute
/// assignment. The storage layer rejects empty or over-long names at
/// commit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDraft {
    pub channel_name: String,
    pub created_at: i64,
}

impl ChannelDraft {
    pub fn new(channel_name: impl Into<String>, created_at: i64) -> Self {
        Self {
            channel_name: channel_name.into(),
            created_at,
        }
    }
}
