// qhall Infrastructure - SQLite Adapter
// Implements: ChannelRepository

mod channel_repository;
mod connection;
mod migration;

pub use channel_repository::SqliteChannelRepository;
pub use connection::create_pool;
pub use migration::run_migrations;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
