//! Donation workflow transition service.
//!
//! Orchestrates the guarded, transactional Surplus+Task transitions and
//! the notification/activity fan-out around them. Order of operations per
//! transition: load → pure guard check → transactional write → best-effort
//! notifications and activity log.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_database::repositories::activity::ActivityLogRepository;
use givebridge_database::repositories::surplus::SurplusRepository;
use givebridge_database::repositories::task::TaskRepository;
use givebridge_database::repositories::user::UserRepository;
use givebridge_database::repositories::workflow::WorkflowRepository;
use givebridge_entity::activity::CreateActivityLogEntry;
use givebridge_entity::notification::NotificationPayload;
use givebridge_entity::surplus::Surplus;
use givebridge_entity::task::{Task, TaskStatus};

use crate::context::RequestContext;
use crate::notification::NotificationService;

use super::rules;

/// Executes donation workflow transitions.
#[derive(Debug, Clone)]
pub struct WorkflowService {
    /// Surplus repository (pre-transition loads).
    surplus_repo: Arc<SurplusRepository>,
    /// Task repository (pre-transition loads).
    task_repo: Arc<TaskRepository>,
    /// Transactional compound writes.
    workflow_repo: Arc<WorkflowRepository>,
    /// User repository (actor names for notifications).
    user_repo: Arc<UserRepository>,
    /// Notification fan-out.
    notifications: NotificationService,
    /// Activity log.
    activity_repo: Arc<ActivityLogRepository>,
}

impl WorkflowService {
    /// Creates a new workflow service.
    pub fn new(
        surplus_repo: Arc<SurplusRepository>,
        task_repo: Arc<TaskRepository>,
        workflow_repo: Arc<WorkflowRepository>,
        user_repo: Arc<UserRepository>,
        notifications: NotificationService,
        activity_repo: Arc<ActivityLogRepository>,
    ) -> Self {
        Self {
            surplus_repo,
            task_repo,
            workflow_repo,
            user_repo,
            notifications,
            activity_repo,
        }
    }

    /// Task board: tasks open for any partner to accept.
    pub async fn available_tasks(&self, page: PageRequest) -> Result<PageResponse<Task>, AppError> {
        self.task_repo.find_available(&page).await
    }

    /// The current partner's own tasks, optionally filtered by status.
    pub async fn partner_tasks(
        &self,
        ctx: &RequestContext,
        status: Option<TaskStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Task>, AppError> {
        self.task_repo.find_by_partner(ctx.user_id, status, &page).await
    }

    /// NGO claims an available listing, spawning its delivery task.
    pub async fn claim(
        &self,
        ctx: &RequestContext,
        surplus_id: Uuid,
        delivery_location: String,
    ) -> Result<(Surplus, Task), AppError> {
        let surplus = self
            .surplus_repo
            .find_by_id(surplus_id)
            .await?
            .ok_or_else(|| AppError::not_found("Surplus not found"))?;
        rules::ensure_claimable(&surplus)?;

        let ngo_name = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .map(|u| u.name)
            .unwrap_or_else(|| "An NGO".to_string());

        let (surplus, task) = self
            .workflow_repo
            .claim(surplus_id, ctx.user_id, &delivery_location)
            .await?;

        info!(surplus_id = %surplus.id, ngo_id = %ctx.user_id, "Surplus claimed");

        self.notifications
            .record(
                surplus.donor_id,
                "Surplus Item Claimed",
                &format!("{ngo_name} has requested your surplus item: {}", surplus.title),
                NotificationPayload::SurplusClaimed {
                    surplus_id: surplus.id,
                    task_id: task.id,
                    ngo_id: ctx.user_id,
                    ngo_name,
                },
            )
            .await;

        self.log_activity(ctx.user_id, "surplus.claim", "surplus", surplus.id)
            .await;

        Ok((surplus, task))
    }

    /// Donor approves the pending claim on their listing.
    pub async fn accept_claim(
        &self,
        ctx: &RequestContext,
        surplus_id: Uuid,
    ) -> Result<(Surplus, Task), AppError> {
        let surplus = self
            .surplus_repo
            .find_by_id_for_donor(surplus_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Surplus not found"))?;
        rules::ensure_decidable(&surplus, ctx.user_id)?;

        let (surplus, task) = self.workflow_repo.accept_claim(surplus_id, ctx.user_id).await?;

        info!(surplus_id = %surplus.id, "Claim accepted by donor");

        self.notifications
            .record(
                task.ngo_id,
                "Claim Accepted",
                &format!("The donor has accepted your claim on: {}", surplus.title),
                NotificationPayload::ClaimAccepted {
                    surplus_id: surplus.id,
                    task_id: task.id,
                },
            )
            .await;

        self.log_activity(ctx.user_id, "surplus.accept", "surplus", surplus.id)
            .await;

        Ok((surplus, task))
    }

    /// Donor rejects the pending claim: the listing reopens and the task
    /// is deleted.
    pub async fn reject_claim(
        &self,
        ctx: &RequestContext,
        surplus_id: Uuid,
    ) -> Result<Surplus, AppError> {
        let surplus = self
            .surplus_repo
            .find_by_id_for_donor(surplus_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Surplus not found"))?;
        rules::ensure_decidable(&surplus, ctx.user_id)?;

        let (surplus, task) = self.workflow_repo.reject_claim(surplus_id, ctx.user_id).await?;

        info!(surplus_id = %surplus.id, "Claim rejected by donor");

        self.notifications
            .record(
                task.ngo_id,
                "Claim Rejected",
                &format!(
                    "The donor has rejected your claim on: {}. The item is available again.",
                    surplus.title
                ),
                NotificationPayload::ClaimRejected {
                    surplus_id: surplus.id,
                },
            )
            .await;

        self.log_activity(ctx.user_id, "surplus.reject", "surplus", surplus.id)
            .await;

        Ok(surplus)
    }

    /// Logistics partner takes an unassigned delivery task.
    pub async fn accept_task(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
    ) -> Result<Task, AppError> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;
        rules::ensure_assignable(&task)?;

        let (task, surplus) = self.workflow_repo.assign_partner(task_id, ctx.user_id).await?;

        info!(task_id = %task.id, partner_id = %ctx.user_id, "Task accepted by logistics partner");

        let payload = NotificationPayload::TaskAccepted {
            surplus_id: surplus.id,
            task_id: task.id,
            logistics_partner_id: ctx.user_id,
        };
        self.notifications
            .record(
                task.donor_id,
                "Delivery Partner Assigned",
                &format!("A logistics partner will pick up: {}", surplus.title),
                payload.clone(),
            )
            .await;
        self.notifications
            .record(
                task.ngo_id,
                "Delivery Partner Assigned",
                &format!("A logistics partner will deliver: {}", surplus.title),
                payload,
            )
            .await;

        self.log_activity(ctx.user_id, "task.accept", "task", task.id)
            .await;

        Ok(task)
    }

    /// Logistics partner advances a held task through the closed status
    /// table. Pickup and delivery also advance the surplus and stamp the
    /// corresponding timestamp.
    pub async fn update_task_status(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        target: TaskStatus,
    ) -> Result<Task, AppError> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;
        rules::ensure_partner_update(&task, ctx.user_id, target)?;

        let task = match target {
            TaskStatus::PickedUp => {
                let (task, surplus) =
                    self.workflow_repo.record_pickup(task_id, ctx.user_id).await?;
                self.notify_progress(
                    &task,
                    &surplus.title,
                    "Items Picked Up",
                    NotificationPayload::PickupCompleted {
                        surplus_id: surplus.id,
                        task_id: task.id,
                        picked_up_at: task.actual_pickup.unwrap_or(ctx.request_time),
                    },
                )
                .await;
                task
            }
            TaskStatus::InTransit => {
                self.workflow_repo.record_transit(task_id, ctx.user_id).await?
            }
            TaskStatus::Delivered => {
                let (task, surplus) =
                    self.workflow_repo.record_delivery(task_id, ctx.user_id).await?;
                self.notify_progress(
                    &task,
                    &surplus.title,
                    "Items Delivered",
                    NotificationPayload::DeliveryCompleted {
                        surplus_id: surplus.id,
                        task_id: task.id,
                        delivered_at: task.actual_delivery.unwrap_or(ctx.request_time),
                    },
                )
                .await;
                task
            }
            // ensure_partner_update already rejected everything else.
            other => {
                return Err(AppError::validation(format!(
                    "Unsupported status update: '{other}'"
                )));
            }
        };

        info!(task_id = %task.id, status = %task.status, "Task status updated");

        self.log_activity(ctx.user_id, "task.status", "task", task.id)
            .await;

        Ok(task)
    }

    /// Notify both ends of a delivery about pickup/delivery progress.
    async fn notify_progress(
        &self,
        task: &Task,
        surplus_title: &str,
        title: &str,
        payload: NotificationPayload,
    ) {
        self.notifications
            .record(
                task.donor_id,
                title,
                &format!("{title}: {surplus_title}"),
                payload.clone(),
            )
            .await;
        self.notifications
            .record(
                task.ngo_id,
                title,
                &format!("{title}: {surplus_title}"),
                payload,
            )
            .await;
    }

    /// Append a workflow activity entry; failures are logged, not surfaced.
    async fn log_activity(&self, actor_id: Uuid, action: &str, resource_type: &str, resource_id: Uuid) {
        let entry = CreateActivityLogEntry {
            actor_id,
            action: action.to_string(),
            resource_type: resource_type.to_string(),
            resource_id: Some(resource_id),
            details: None,
        };
        if let Err(e) = self.activity_repo.create(&entry).await {
            warn!(action, "Failed to append activity entry: {e}");
        }
    }
}
