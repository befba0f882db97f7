//! Need request repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_entity::request::model::CreateNeedRequest;
use givebridge_entity::request::{NeedRequest, RequestStatus, Urgency};

/// Per-urgency aggregate row for admin analytics.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct UrgencyCountRow {
    /// The urgency level.
    pub urgency: Urgency,
    /// Number of requests at that level.
    pub count: i64,
}

/// Repository for NGO need request operations.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new need request (status starts at `open`).
    pub async fn create(&self, data: &CreateNeedRequest) -> AppResult<NeedRequest> {
        sqlx::query_as::<_, NeedRequest>(
            "INSERT INTO requests (ngo_id, title, description, category, quantity, unit, urgency) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.ngo_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(data.urgency)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// List an NGO's own requests with an optional status filter.
    pub async fn find_by_ngo(
        &self,
        ngo_id: Uuid,
        status: Option<RequestStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<NeedRequest>> {
        let (count_sql, select_sql) = if status.is_some() {
            (
                "SELECT COUNT(*) FROM requests WHERE ngo_id = $1 AND status = $2",
                "SELECT * FROM requests WHERE ngo_id = $1 AND status = $2 \
                 ORDER BY created_at DESC LIMIT $3 OFFSET $4",
            )
        } else {
            (
                "SELECT COUNT(*) FROM requests WHERE ngo_id = $1",
                "SELECT * FROM requests WHERE ngo_id = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql).bind(ngo_id);
        let mut select_query = sqlx::query_as::<_, NeedRequest>(select_sql).bind(ngo_id);

        if let Some(s) = status {
            count_query = count_query.bind(s);
            select_query = select_query.bind(s);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
        })?;

        let requests = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
            })?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update an NGO's own request.
    pub async fn update(
        &self,
        id: Uuid,
        ngo_id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        quantity: Option<i32>,
        urgency: Option<Urgency>,
        status: Option<RequestStatus>,
    ) -> AppResult<NeedRequest> {
        sqlx::query_as::<_, NeedRequest>(
            "UPDATE requests SET title = COALESCE($3, title), \
                                 description = COALESCE($4, description), \
                                 quantity = COALESCE($5, quantity), \
                                 urgency = COALESCE($6, urgency), \
                                 status = COALESCE($7, status), \
                                 updated_at = NOW() \
             WHERE id = $1 AND ngo_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(ngo_id)
        .bind(title)
        .bind(description)
        .bind(quantity)
        .bind(urgency)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update request", e))?
        .ok_or_else(|| AppError::not_found("Request not found"))
    }

    /// Open requests at high or critical urgency, most urgent and newest
    /// first, capped for the urgent-needs board.
    pub async fn find_urgent(&self, limit: i64) -> AppResult<Vec<NeedRequest>> {
        sqlx::query_as::<_, NeedRequest>(
            "SELECT * FROM requests \
             WHERE status = 'open' AND urgency IN ('high', 'critical') \
             ORDER BY urgency DESC, created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list urgent needs", e))
    }

    /// Count all requests filed by an NGO.
    pub async fn count_by_ngo(&self, ngo_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE ngo_id = $1")
            .bind(ngo_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count NGO requests", e)
            })
    }

    /// Count an NGO's fulfilled requests.
    pub async fn count_fulfilled_by_ngo(&self, ngo_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM requests WHERE ngo_id = $1 AND status = 'fulfilled'",
        )
        .bind(ngo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count fulfilled requests", e)
        })
    }

    /// Count total requests.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM requests")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count requests", e))
    }

    /// Count requests per urgency level.
    pub async fn breakdown_by_urgency(&self) -> AppResult<Vec<UrgencyCountRow>> {
        sqlx::query_as::<_, UrgencyCountRow>(
            "SELECT urgency, COUNT(*) AS count FROM requests GROUP BY urgency",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group requests by urgency", e)
        })
    }
}
