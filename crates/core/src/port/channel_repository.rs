// Channel Repository Port (Interface)

use crate::domain::{Channel, ChannelDraft, ChannelId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Channel persistence.
///
/// Transaction isolation and constraint enforcement belong to the
/// implementing storage layer; constraint violations (empty name, name over
/// the length bound) surface from `insert`/`update` as database errors.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Insert a new channel, returning the storage-assigned id
    async fn insert(&self, draft: &ChannelDraft) -> Result<ChannelId>;

    /// Find channel by ID
    async fn find_by_id(&self, id: ChannelId) -> Result<Option<Channel>>;

    /// All channels, ordered by id
    async fn list_all(&self) -> Result<Vec<Channel>>;

    /// Rewrite name and updated_at of an existing channel
    async fn update(&self, channel: &Channel) -> Result<()>;

    /// Delete a channel; false if no such row existed
    async fn delete(&self, id: ChannelId) -> Result<bool>;

    /// Total number of channels
    async fn count(&self) -> Result<i64>;
}
