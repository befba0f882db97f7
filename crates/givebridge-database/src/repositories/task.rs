//! Delivery task repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_entity::task::{Task, TaskStatus};

/// Per-status aggregate row for admin analytics.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct TaskStatusCountRow {
    /// The status.
    pub status: TaskStatus,
    /// Number of tasks in that status.
    pub count: i64,
}

/// Repository for delivery task queries.
///
/// Workflow mutations (claim/accept/reject/assign/advance) live in
/// [`super::workflow::WorkflowRepository`] so the compound writes stay
/// transactional; this repository is read-mostly.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// Find the task associated with a surplus listing, if any.
    pub async fn find_by_surplus(&self, surplus_id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE surplus_id = $1")
            .bind(surplus_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find task by surplus", e)
            })
    }

    /// List tasks open for any logistics partner to accept: not yet
    /// assigned to a partner and still in `pending` or `assigned`.
    pub async fn find_available(&self, page: &PageRequest) -> AppResult<PageResponse<Task>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks \
             WHERE logistics_partner_id IS NULL AND status IN ('pending', 'assigned')",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count available tasks", e)
        })?;

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks \
             WHERE logistics_partner_id IS NULL AND status IN ('pending', 'assigned') \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list available tasks", e)
        })?;

        Ok(PageResponse::new(
            tasks,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a partner's own tasks with an optional status filter.
    pub async fn find_by_partner(
        &self,
        partner_id: Uuid,
        status: Option<TaskStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        let (count_sql, select_sql) = if status.is_some() {
            (
                "SELECT COUNT(*) FROM tasks WHERE logistics_partner_id = $1 AND status = $2",
                "SELECT * FROM tasks WHERE logistics_partner_id = $1 AND status = $2 \
                 ORDER BY created_at DESC LIMIT $3 OFFSET $4",
            )
        } else {
            (
                "SELECT COUNT(*) FROM tasks WHERE logistics_partner_id = $1",
                "SELECT * FROM tasks WHERE logistics_partner_id = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql).bind(partner_id);
        let mut select_query = sqlx::query_as::<_, Task>(select_sql).bind(partner_id);

        if let Some(s) = status {
            count_query = count_query.bind(s);
            select_query = select_query.bind(s);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count partner tasks", e)
        })?;

        let tasks = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list partner tasks", e)
            })?;

        Ok(PageResponse::new(
            tasks,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count all tasks assigned to a partner.
    pub async fn count_by_partner(&self, partner_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE logistics_partner_id = $1")
            .bind(partner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count partner tasks", e)
            })
    }

    /// Count a partner's delivered tasks.
    pub async fn count_delivered_by_partner(&self, partner_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks \
             WHERE logistics_partner_id = $1 AND status = 'delivered'",
        )
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count delivered tasks", e)
        })
    }

    /// Count a partner's on-time deliveries (actual at or before scheduled).
    pub async fn count_on_time_by_partner(&self, partner_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks \
             WHERE logistics_partner_id = $1 AND status = 'delivered' \
               AND actual_delivery IS NOT NULL AND scheduled_delivery IS NOT NULL \
               AND actual_delivery <= scheduled_delivery",
        )
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count on-time tasks", e)
        })
    }

    /// Count tasks in a given status (admin overview).
    pub async fn count_by_status(&self, status: TaskStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count tasks by status", e)
            })
    }

    /// Count total tasks.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))
    }

    /// Count tasks per status.
    pub async fn breakdown_by_status(&self) -> AppResult<Vec<TaskStatusCountRow>> {
        sqlx::query_as::<_, TaskStatusCountRow>(
            "SELECT status, COUNT(*) AS count FROM tasks GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group tasks by status", e)
        })
    }
}
