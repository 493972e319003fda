// Channel Service - Core use cases for channel administration

pub mod register;


pub use register::RegisterChannelRequest;

use crate::domain::{Channel, ChannelId};
use crate::error::{AppError, Result};
use crate::port::{ChannelRepository, TimeProvider};
use std::sync::Arc;
use tracing::info;

/// Channel administration service
pub struct ChannelService {
    channel_repo: Arc<dyn ChannelRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ChannelService {
    pub fn new(
        channel_repo: Arc<dyn ChannelRepository>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            channel_repo,
            time_provider,
        }
    }

    /// Register a new channel
    pub async fn register(&self, req: RegisterChannelRequest) -> Result<Channel> {
        register::execute(
            self.channel_repo.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await
    }

    /// Fetch a channel by id, erroring when absent
    pub async fn get(&self, id: ChannelId) -> Result<Channel> {
        self.channel_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Channel {} not found", id)))
    }

    /// All channels, ordered by id
    pub async fn list(&self) -> Result<Vec<Channel>> {
        self.channel_repo.list_all().await
    }

    /// Total number of channels
    pub async fn count(&self) -> Result<i64> {
        self.channel_repo.count().await
    }

    /// Rename an existing channel
    pub async fn rename(&self, id: ChannelId, new_name: &str) -> Result<Channel> {
        register::validate_name(new_name)?;

        let mut channel = self.get(id).await?;
        channel.channel_name = new_name.to_string();
        channel.updated_at = self.time_provider.now_millis();

        self.channel_repo.update(&channel).await?;
        info!(channel_id = id, name = %channel.channel_name, "Channel renamed");
        Ok(channel)
    }

    /// Delete a channel, erroring when absent
    pub async fn remove(&self, id: ChannelId) -> Result<()> {
        let deleted = self.channel_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Channel {} not found", id)));
        }
        info!(channel_id = id, "Channel removed");
        Ok(())
    }
}
