// Register Channel Use Case

use crate::domain::{Channel, ChannelDraft, CHANNEL_NAME_MAX_LEN};
use crate::error::{AppError, Result};
use crate::port::{ChannelRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterChannelRequest {
    pub channel_name: String,
}

/// Application-level guard on channel names.
///
/// The storage layer enforces the same bounds with a CHECK constraint, so a
/// caller going straight to the repository still fails at commit time.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Channel name is empty".to_string()));
    }

    let len = name.chars().count();
    if len > CHANNEL_NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Channel name too long: {} chars (max {})",
            len, CHANNEL_NAME_MAX_LEN
        )));
    }

    Ok(())
}

/// Execute register use case
///
/// # Arguments
///
/// * `channel_repo` - Channel repository
/// * `time_provider` - Time provider (injected for determinism)
/// * `req` - Register request
pub async fn execute(
    channel_repo: &dyn ChannelRepository,
    time_provider: &dyn TimeProvider,
    req: RegisterChannelRequest,
) -> Result<Channel> {
    validate_name(&req.channel_name)?;

    let created_at = time_provider.now_millis();
    let draft = ChannelDraft::new(req.channel_name, created_at);

    // The storage layer assigns the surrogate id on insert
    let channel_id = channel_repo.insert(&draft).await?;

    let channel = channel_repo
        .find_by_id(channel_id)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Channel {} vanished after insert", channel_id))
        })?;

    info!(channel_id, name = %channel.channel_name, "Channel registered");
    Ok(channel)
}
