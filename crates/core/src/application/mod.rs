// Application Layer - Use Cases and Business Logic

pub mod channel;

// Re-exports
pub use channel::ChannelService;
