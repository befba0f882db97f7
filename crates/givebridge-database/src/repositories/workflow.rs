//! Transactional donation-workflow repository.
//!
//! Every compound Surplus+Task transition runs inside a single database
//! transaction with status guards in the `WHERE` clause, so a concurrent
//! duplicate request loses the race cleanly instead of double-applying.
//! Notification fan-out happens in the service layer after commit.

use sqlx::PgPool;
use uuid::Uuid;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_entity::surplus::Surplus;
use givebridge_entity::task::Task;

/// Repository executing the compound workflow state transitions.
#[derive(Debug, Clone)]
pub struct WorkflowRepository {
    pool: PgPool,
}

impl WorkflowRepository {
    /// Create a new workflow repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// NGO claims an available listing: Surplus → `claimed`, Task created
    /// as `pending`.
    pub async fn claim(
        &self,
        surplus_id: Uuid,
        ngo_id: Uuid,
        delivery_location: &str,
    ) -> AppResult<(Surplus, Task)> {
        let mut tx = self.begin().await?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'claimed', claimed_by = $2, updated_at = NOW() \
             WHERE id = $1 AND status = 'available' RETURNING *",
        )
        .bind(surplus_id)
        .bind(ngo_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim surplus", e))?
        .ok_or_else(|| AppError::validation("Surplus is no longer available"))?;

        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (surplus_id, donor_id, ngo_id, pickup_location, delivery_location) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(surplus.id)
        .bind(surplus.donor_id)
        .bind(ngo_id)
        .bind(&surplus.location)
        .bind(delivery_location)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create delivery task", e)
        })?;

        self.commit(tx).await?;
        Ok((surplus, task))
    }

    /// Donor approves a claim: Surplus → `accepted`, Task → `assigned`.
    pub async fn accept_claim(&self, surplus_id: Uuid, donor_id: Uuid) -> AppResult<(Surplus, Task)> {
        let mut tx = self.begin().await?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'accepted', updated_at = NOW() \
             WHERE id = $1 AND donor_id = $2 AND status = 'claimed' RETURNING *",
        )
        .bind(surplus_id)
        .bind(donor_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to accept claim", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found"))?;

        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET status = 'assigned', updated_at = NOW() \
             WHERE surplus_id = $1 RETURNING *",
        )
        .bind(surplus_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))?
        .ok_or_else(|| AppError::not_found("Delivery task not found for claim"))?;

        self.commit(tx).await?;
        Ok((surplus, task))
    }

    /// Donor rejects a claim: Surplus back to `available` with claim and
    /// partner cleared, Task deleted. Returns the listing and the deleted
    /// task so callers can notify the claimant.
    pub async fn reject_claim(&self, surplus_id: Uuid, donor_id: Uuid) -> AppResult<(Surplus, Task)> {
        let mut tx = self.begin().await?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'available', claimed_by = NULL, \
                                  logistics_partner_id = NULL, updated_at = NOW() \
             WHERE id = $1 AND donor_id = $2 AND status = 'claimed' RETURNING *",
        )
        .bind(surplus_id)
        .bind(donor_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reject claim", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found"))?;

        let task = sqlx::query_as::<_, Task>(
            "DELETE FROM tasks WHERE surplus_id = $1 RETURNING *",
        )
        .bind(surplus_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?
        .ok_or_else(|| AppError::not_found("Delivery task not found for claim"))?;

        self.commit(tx).await?;
        Ok((surplus, task))
    }

    /// Logistics partner takes an unassigned task: Task.partner set,
    /// Task → `assigned`, Surplus.partner mirrored.
    pub async fn assign_partner(&self, task_id: Uuid, partner_id: Uuid) -> AppResult<(Task, Surplus)> {
        let mut tx = self.begin().await?;

        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET logistics_partner_id = $2, status = 'assigned', updated_at = NOW() \
             WHERE id = $1 AND logistics_partner_id IS NULL \
               AND status IN ('pending', 'assigned') RETURNING *",
        )
        .bind(task_id)
        .bind(partner_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign partner", e))?
        .ok_or_else(|| AppError::validation("Task is not available"))?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET logistics_partner_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(task.surplus_id)
        .bind(partner_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update surplus", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found for task"))?;

        self.commit(tx).await?;
        Ok((task, surplus))
    }

    /// Partner reports pickup: Task → `picked-up` with `actual_pickup`
    /// stamped, Surplus → `in-transit`.
    pub async fn record_pickup(&self, task_id: Uuid, partner_id: Uuid) -> AppResult<(Task, Surplus)> {
        let mut tx = self.begin().await?;

        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET status = 'picked-up', actual_pickup = NOW(), updated_at = NOW() \
             WHERE id = $1 AND logistics_partner_id = $2 AND status = 'assigned' RETURNING *",
        )
        .bind(task_id)
        .bind(partner_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record pickup", e))?
        .ok_or_else(|| AppError::validation("Task cannot be picked up in its current state"))?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'in-transit', updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(task.surplus_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update surplus", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found for task"))?;

        self.commit(tx).await?;
        Ok((task, surplus))
    }

    /// Partner reports being en route: Task → `in-transit`. Task-only
    /// advance; the surplus already moved to `in-transit` at pickup.
    pub async fn record_transit(&self, task_id: Uuid, partner_id: Uuid) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET status = 'in-transit', updated_at = NOW() \
             WHERE id = $1 AND logistics_partner_id = $2 AND status = 'picked-up' RETURNING *",
        )
        .bind(task_id)
        .bind(partner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record transit", e))?
        .ok_or_else(|| AppError::validation("Task cannot move to in-transit in its current state"))
    }

    /// Partner reports delivery: Task → `delivered` with `actual_delivery`
    /// stamped, Surplus → `delivered`.
    pub async fn record_delivery(
        &self,
        task_id: Uuid,
        partner_id: Uuid,
    ) -> AppResult<(Task, Surplus)> {
        let mut tx = self.begin().await?;

        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET status = 'delivered', actual_delivery = NOW(), updated_at = NOW() \
             WHERE id = $1 AND logistics_partner_id = $2 \
               AND status IN ('picked-up', 'in-transit') RETURNING *",
        )
        .bind(task_id)
        .bind(partner_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record delivery", e))?
        .ok_or_else(|| AppError::validation("Task cannot be delivered in its current state"))?;

        let surplus = sqlx::query_as::<_, Surplus>(
            "UPDATE surpluses SET status = 'delivered', updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(task.surplus_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update surplus", e))?
        .ok_or_else(|| AppError::not_found("Surplus not found for task"))?;

        self.commit(tx).await?;
        Ok((task, surplus))
    }

    async fn begin(&self) -> AppResult<sqlx::Transaction<'static, sqlx::Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: sqlx::Transaction<'static, sqlx::Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }
}
