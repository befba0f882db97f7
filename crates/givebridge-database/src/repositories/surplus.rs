//! Surplus repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_entity::surplus::model::CreateSurplus;
use givebridge_entity::surplus::{ItemCategory, Surplus, SurplusStatus};

/// Per-category aggregate row for admin analytics.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct CategoryBreakdownRow {
    /// The category.
    pub category: ItemCategory,
    /// Number of listings in the category.
    pub count: i64,
    /// Summed quantity across the category.
    pub total_quantity: i64,
}

/// Per-status aggregate row.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct SurplusStatusCountRow {
    /// The status.
    pub status: SurplusStatus,
    /// Number of listings in that status.
    pub count: i64,
}

/// Per-month listing trend row.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct MonthlyTrendRow {
    /// Start of the month bucket.
    pub month: DateTime<Utc>,
    /// Listings created in that month.
    pub count: i64,
}

/// Repository for surplus listing CRUD, query, and aggregation operations.
#[derive(Debug, Clone)]
pub struct SurplusRepository {
    pool: PgPool,
}

impl SurplusRepository {
    /// Create a new surplus repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a listing by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Surplus>> {
        sqlx::query_as::<_, Surplus>("SELECT * FROM surpluses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find surplus", e))
    }

    /// Find a listing owned by a specific donor.
    pub async fn find_by_id_for_donor(
        &self,
        id: Uuid,
        donor_id: Uuid,
    ) -> AppResult<Option<Surplus>> {
        sqlx::query_as::<_, Surplus>("SELECT * FROM surpluses WHERE id = $1 AND donor_id = $2")
            .bind(id)
            .bind(donor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find donor surplus", e)
            })
    }

    /// Create a new listing (status starts at `available`).
    pub async fn create(&self, data: &CreateSurplus) -> AppResult<Surplus> {
        sqlx::query_as::<_, Surplus>(
            "INSERT INTO surpluses (donor_id, title, description, category, quantity, unit, location, expiry_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.donor_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(&data.location)
        .bind(data.expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create surplus", e))
    }

    /// Update a donor's own listing details.
    pub async fn update_details(
        &self,
        id: Uuid,
        donor_id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        quantity: Option<i32>,
        unit: Option<&str>,
        location: Option<&str>,
        expiry_date: Option<DateTime<Utc>>,
    ) -> AppResult<Surplus> {
        sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET title = COALESCE($3, title), \
                                  description = COALESCE($4, description), \
                                  quantity = COALESCE($5, quantity), \
                                  unit = COALESCE($6, unit), \
                                  location = COALESCE($7, location), \
                                  expiry_date = COALESCE($8, expiry_date), \
                                  updated_at = NOW() \
             WHERE id = $1 AND donor_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(donor_id)
        .bind(title)
        .bind(description)
        .bind(quantity)
        .bind(unit)
        .bind(location)
        .bind(expiry_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update surplus", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found"))
    }

    /// Withdraw a still-available listing. The guard loses to any
    /// concurrent claim, in which case no row comes back.
    pub async fn mark_expired(&self, id: Uuid, donor_id: Uuid) -> AppResult<Option<Surplus>> {
        sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'expired', updated_at = NOW() \
             WHERE id = $1 AND donor_id = $2 AND status = 'available' RETURNING *",
        )
        .bind(id)
        .bind(donor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to expire surplus", e))
    }

    /// List a donor's own listings with optional status/category filters.
    pub async fn find_by_donor(
        &self,
        donor_id: Uuid,
        status: Option<SurplusStatus>,
        category: Option<ItemCategory>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Surplus>> {
        let mut conditions = vec!["donor_id = $1".to_string()];
        let mut param_idx = 2u32;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));
        let count_sql = format!("SELECT COUNT(*) FROM surpluses {where_clause}");
        let select_sql = format!(
            "SELECT * FROM surpluses {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(donor_id);
        let mut select_query = sqlx::query_as::<_, Surplus>(&select_sql).bind(donor_id);

        if let Some(s) = status {
            count_query = count_query.bind(s);
            select_query = select_query.bind(s);
        }
        if let Some(c) = category {
            count_query = count_query.bind(c);
            select_query = select_query.bind(c);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count donor surpluses", e)
        })?;

        let items = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list donor surpluses", e)
            })?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List claimable listings for the NGO browse view.
    ///
    /// Only `available` listings that have not passed their expiry date,
    /// newest first, with optional category and title/description search.
    pub async fn find_available(
        &self,
        category: Option<ItemCategory>,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Surplus>> {
        let mut conditions = vec![
            "status = 'available'".to_string(),
            "(expiry_date IS NULL OR expiry_date > NOW())".to_string(),
        ];
        let mut param_idx = 1u32;

        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${param_idx} OR description ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));
        let count_sql = format!("SELECT COUNT(*) FROM surpluses {where_clause}");
        let select_sql = format!(
            "SELECT * FROM surpluses {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let pattern = search.map(|s| format!("%{s}%"));

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, Surplus>(&select_sql);

        if let Some(c) = category {
            count_query = count_query.bind(c);
            select_query = select_query.bind(c);
        }
        if let Some(p) = &pattern {
            count_query = count_query.bind(p.clone());
            select_query = select_query.bind(p.clone());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count available surpluses", e)
        })?;

        let items = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list available surpluses", e)
            })?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count a donor's listings currently in one of the given statuses.
    pub async fn count_by_donor_in_statuses(
        &self,
        donor_id: Uuid,
        statuses: &[SurplusStatus],
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM surpluses WHERE donor_id = $1 AND status = ANY($2)",
        )
        .bind(donor_id)
        .bind(statuses)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count donor surpluses", e)
        })
    }

    /// Sum the delivered quantity for a donor.
    pub async fn delivered_quantity_by_donor(&self, donor_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM surpluses \
             WHERE donor_id = $1 AND status = 'delivered'",
        )
        .bind(donor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum delivered quantity", e)
        })
    }

    /// Count delivered listings claimed by an NGO.
    pub async fn count_received_by_ngo(&self, ngo_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM surpluses WHERE claimed_by = $1 AND status = 'delivered'",
        )
        .bind(ngo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count received items", e)
        })
    }

    /// Sum the delivered quantity received by an NGO.
    pub async fn received_quantity_by_ngo(&self, ngo_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM surpluses \
             WHERE claimed_by = $1 AND status = 'delivered'",
        )
        .bind(ngo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum received quantity", e)
        })
    }

    /// Count listings in a given status (admin overview).
    pub async fn count_by_status(&self, status: SurplusStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM surpluses WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count surpluses by status", e)
            })
    }

    /// Count total listings.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM surpluses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count surpluses", e))
    }

    /// Group listings by category with counts and quantity sums.
    pub async fn breakdown_by_category(&self) -> AppResult<Vec<CategoryBreakdownRow>> {
        sqlx::query_as::<_, CategoryBreakdownRow>(
            "SELECT category, COUNT(*) AS count, COALESCE(SUM(quantity), 0)::BIGINT AS total_quantity \
             FROM surpluses GROUP BY category ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group surpluses by category", e)
        })
    }

    /// Count listings per status.
    pub async fn breakdown_by_status(&self) -> AppResult<Vec<SurplusStatusCountRow>> {
        sqlx::query_as::<_, SurplusStatusCountRow>(
            "SELECT status, COUNT(*) AS count FROM surpluses GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group surpluses by status", e)
        })
    }

    /// Listings created per month, oldest bucket first.
    pub async fn monthly_trend(&self) -> AppResult<Vec<MonthlyTrendRow>> {
        sqlx::query_as::<_, MonthlyTrendRow>(
            "SELECT date_trunc('month', created_at) AS month, COUNT(*) AS count \
             FROM surpluses GROUP BY 1 ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute monthly trend", e)
        })
    }
}
