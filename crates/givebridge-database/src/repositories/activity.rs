//! Activity log repository implementation.

use sqlx::PgPool;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_entity::activity::{ActivityLogEntry, CreateActivityLogEntry};

/// Repository for the append-only activity log.
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Create a new activity log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an activity log entry.
    pub async fn create(&self, data: &CreateActivityLogEntry) -> AppResult<ActivityLogEntry> {
        sqlx::query_as::<_, ActivityLogEntry>(
            "INSERT INTO activity_log (actor_id, action, resource_type, resource_id, details) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.actor_id)
        .bind(&data.action)
        .bind(&data.resource_type)
        .bind(data.resource_id)
        .bind(&data.details)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create activity entry", e)
        })
    }

    /// List entries, newest first, optionally filtered by resource type.
    pub async fn find_recent(
        &self,
        resource_type: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ActivityLogEntry>> {
        let (count_sql, select_sql) = if resource_type.is_some() {
            (
                "SELECT COUNT(*) FROM activity_log WHERE resource_type = $1",
                "SELECT * FROM activity_log WHERE resource_type = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
        } else {
            (
                "SELECT COUNT(*) FROM activity_log",
                "SELECT * FROM activity_log ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, ActivityLogEntry>(select_sql);

        if let Some(rt) = resource_type {
            count_query = count_query.bind(rt.to_string());
            select_query = select_query.bind(rt.to_string());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count activity entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list activity entries", e)
            })?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
