// SQLite ChannelRepository Implementation

use async_trait::async_trait;
use qhall_core::domain::{Channel, ChannelDraft, ChannelId};
use qhall_core::error::{AppError, Result};
use qhall_core::port::ChannelRepository;
use sqlx::SqlitePool;

// Helper to convert sqlx::Error to AppError with structured information
fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // Extract database-specific error code and message
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "275" => {
                        // CHECK constraint failed (empty or over-long name)
                        AppError::Database(format!(
                            "Check constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "1299" => {
                        // NOT NULL constraint failed
                        AppError::Database(format!(
                            "Not-null constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "2067" | "1555" => {
                        // UNIQUE constraint failed
                        AppError::Database(format!(
                            "Unique constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "787" | "3850" => {
                        // FOREIGN KEY constraint failed
                        AppError::Database(format!(
                            "Foreign key constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Database(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => {
                        // SQLITE_FULL - database or disk is full
                        AppError::Database(format!("Database full: {}", db_err.message()))
                    }
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        _ => AppError::Database(err.to_string()),
    }
}

pub struct SqliteChannelRepository {
    pool: SqlitePool,
}

impl SqliteChannelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for SqliteChannelRepository {
    async fn insert(&self, draft: &ChannelDraft) -> Result<ChannelId> {
        // channel_id is assigned by SQLite; constraint violations on the
        // name surface here, at commit time
        let result = sqlx::query(
            r#"
            INSERT INTO channels (channel_name, created_at, updated_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&draft.channel_name)
        .bind(draft.created_at)
        .bind(draft.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: ChannelId) -> Result<Option<Channel>> {
        let row =
            sqlx::query_as::<_, ChannelRow>("SELECT * FROM channels WHERE channel_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_channel()))
    }

    async fn list_all(&self) -> Result<Vec<Channel>> {
        let rows =
            sqlx::query_as::<_, ChannelRow>("SELECT * FROM channels ORDER BY channel_id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|r| r.into_channel()).collect())
    }

    async fn update(&self, channel: &Channel) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE channels
            SET channel_name = ?, updated_at = ?
            WHERE channel_id = ?
            "#,
        )
        .bind(&channel.channel_name)
        .bind(channel.updated_at)
        .bind(channel.channel_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Channel {} not found",
                channel.channel_id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: ChannelId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM channels WHERE channel_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM channels")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    channel_id: i64,
    channel_name: String,
    created_at: i64,
    updated_at: i64,
}

impl ChannelRow {
    fn into_channel(self) -> Channel {
        Channel {
            channel_id: self.channel_id,
            channel_name: self.channel_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
