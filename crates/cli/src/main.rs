//! qhall CLI - Local administration for the channel store
//!
//! Operates directly on the SQLite database file; there is no server
//! component.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qhall_core::application::channel::RegisterChannelRequest;
use qhall_core::application::ChannelService;
use qhall_core::domain::{Channel, ChannelId};
use qhall_core::port::time_provider::SystemTimeProvider;
use qhall_infra_sqlite::{create_pool, run_migrations, SqliteChannelRepository};

const DEFAULT_DB_PATH: &str = "~/.qhall/channels.db";

#[derive(Parser)]
#[command(name = "qhall")]
#[command(about = "Channel store administration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the SQLite database file
    #[arg(long, env = "QHALL_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new channel
    Add {
        /// Channel name (1-100 characters)
        name: String,
    },

    /// List all channels
    List,

    /// Show a single channel
    Show {
        /// Channel id
        id: ChannelId,
    },

    /// Rename a channel
    Rename {
        /// Channel id
        id: ChannelId,

        /// New channel name
        name: String,
    },

    /// Delete a channel
    Remove {
        /// Channel id
        id: ChannelId,
    },

    /// Show store status
    Status,
}

#[derive(Tabled)]
struct ChannelLine {
    id: i64,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl From<&Channel> for ChannelLine {
    fn from(c: &Channel) -> Self {
        Self {
            id: c.channel_id,
            name: c.channel_name.clone(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

fn init_logging() {
    let log_format = std::env::var("QHALL_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let db_path = shellexpand::tilde(&cli.db).into_owned();

    let pool = create_pool(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path))?;
    run_migrations(&pool).await.context("Migration failed")?;

    let channel_repo = Arc::new(SqliteChannelRepository::new(pool));
    let service = ChannelService::new(channel_repo, Arc::new(SystemTimeProvider));

    match cli.command {
        Commands::Add { name } => {
            let channel = service
                .register(RegisterChannelRequest { channel_name: name })
                .await?;
            println!("{} {}", "Registered".green(), channel);
        }

        Commands::List => {
            let channels = service.list().await?;
            if channels.is_empty() {
                println!("{}", "No channels".yellow());
            } else {
                let lines: Vec<ChannelLine> = channels.iter().map(ChannelLine::from).collect();
                println!("{}", Table::new(lines));
            }
        }

        Commands::Show { id } => {
            let channel = service.get(id).await?;
            println!("{}", Table::new([ChannelLine::from(&channel)]));
        }

        Commands::Rename { id, name } => {
            let channel = service.rename(id, &name).await?;
            println!("{} {}", "Renamed".green(), channel);
        }

        Commands::Remove { id } => {
            service.remove(id).await?;
            println!("{} channel {}", "Removed".green(), id);
        }

        Commands::Status => {
            let count = service.count().await?;
            println!("database: {}", db_path);
            println!("channels: {}", count.to_string().cyan());
        }
    }

    Ok(())
}
