//! Channel store integration tests
//!
//! Exercises the full stack: ChannelService -> ChannelRepository -> SQLite.

use std::sync::Arc;

use qhall_core::application::channel::RegisterChannelRequest;
use qhall_core::application::ChannelService;
use qhall_core::domain::ChannelDraft;
use qhall_core::error::AppError;
use qhall_core::port::time_provider::SystemTimeProvider;
use qhall_core::port::ChannelRepository;
use qhall_infra_sqlite::{create_pool, run_migrations, SqliteChannelRepository};

async fn setup() -> (Arc<SqliteChannelRepository>, ChannelService) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let repo = Arc::new(SqliteChannelRepository::new(pool));
    let service = ChannelService::new(repo.clone(), Arc::new(SystemTimeProvider));
    (repo, service)
}

#[tokio::test]
async fn test_register_and_fetch() {
    let (_repo, service) = setup().await;

    let channel = service
        .register(RegisterChannelRequest {
            channel_name: "North".to_string(),
        })
        .await
        .unwrap();

    assert!(channel.channel_id > 0);
    assert_eq!(channel.channel_name, "North");

    let fetched = service.get(channel.channel_id).await.unwrap();
    assert_eq!(fetched, channel);

    // Human-readable representation shows the name
    assert!(fetched.to_string().contains("North"));
}

#[tokio::test]
async fn test_duplicate_names_get_distinct_ids() {
    let (_repo, service) = setup().await;

    let first = service
        .register(RegisterChannelRequest {
            channel_name: "Walk-in".to_string(),
        })
        .await
        .unwrap();
    let second = service
        .register(RegisterChannelRequest {
            channel_name: "Walk-in".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(first.channel_id, second.channel_id);
    assert_eq!(service.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_name_bounds_enforced_at_both_layers() {
    let (repo, service) = setup().await;

    // Service-level guard
    let result = service
        .register(RegisterChannelRequest {
            channel_name: "x".repeat(101),
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Bypassing the service still fails, at commit time
    let result = repo.insert(&ChannelDraft::new("x".repeat(101), 0)).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let result = repo.insert(&ChannelDraft::new("", 0)).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_rename_and_remove_flow() {
    let (_repo, service) = setup().await;

    let channel = service
        .register(RegisterChannelRequest {
            channel_name: "Front desk".to_string(),
        })
        .await
        .unwrap();

    let renamed = service.rename(channel.channel_id, "Reception").await.unwrap();
    assert_eq!(renamed.channel_name, "Reception");
    assert!(renamed.updated_at >= channel.updated_at);

    service.remove(channel.channel_id).await.unwrap();
    let err = service.get(channel.channel_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Removing again reports NotFound
    let err = service.remove(channel.channel_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_register_100_channels() {
    let (_repo, service) = setup().await;

    let mut seen = std::collections::HashSet::new();
    for i in 0..100 {
        let channel = service
            .register(RegisterChannelRequest {
                channel_name: format!("Counter {}", i),
            })
            .await
            .unwrap();
        assert!(seen.insert(channel.channel_id), "id reused");
    }

    let channels = service.list().await.unwrap();
    assert_eq!(channels.len(), 100);

    // list_all is ordered by id
    let ids: Vec<_> = channels.iter().map(|c| c.channel_id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
