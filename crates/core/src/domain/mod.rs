// Domain Layer - Pure business logic and entities

pub mod channel;

// Re-exports
pub use channel::{Channel, ChannelDraft, ChannelId, CHANNEL_NAME_MAX_LEN};
