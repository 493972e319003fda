// Port Layer - Interfaces for external dependencies

pub mod channel_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use channel_repository::ChannelRepository;
pub use time_provider::TimeProvider;
