//! Surplus listing operations — donor CRUD, tracking, and the NGO
//! browse view. Claim/accept/reject transitions live in
//! [`crate::workflow::WorkflowService`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_database::repositories::surplus::SurplusRepository;
use givebridge_database::repositories::task::TaskRepository;
use givebridge_entity::surplus::model::CreateSurplus;
use givebridge_entity::surplus::{ItemCategory, Surplus, SurplusStatus};
use givebridge_entity::task::Task;

use crate::context::RequestContext;
use crate::workflow::rules;

/// Fields a donor may change on their own listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSurplusFields {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New unit.
    pub unit: Option<String>,
    /// New pickup location.
    pub location: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<DateTime<Utc>>,
    /// Status change; only `expired` is accepted, and only while the
    /// listing is still available.
    pub status: Option<SurplusStatus>,
}

/// Delivery milestones for the donor tracking view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationTimeline {
    /// When the listing was created.
    pub created: DateTime<Utc>,
    /// When the listing was claimed (last update once it left `available`).
    pub claimed: Option<DateTime<Utc>>,
    /// When the items were picked up.
    pub picked_up: Option<DateTime<Utc>>,
    /// When the items were delivered.
    pub delivered: Option<DateTime<Utc>>,
}

/// A listing with its delivery task and milestone timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationTracking {
    /// The listing.
    pub surplus: Surplus,
    /// The delivery task, once a claim exists.
    pub task: Option<Task>,
    /// Milestone timeline.
    pub timeline: DonationTimeline,
}

/// Handles surplus listing reads and donor-side edits.
#[derive(Debug, Clone)]
pub struct SurplusService {
    /// Surplus repository.
    surplus_repo: Arc<SurplusRepository>,
    /// Task repository (tracking view).
    task_repo: Arc<TaskRepository>,
}

impl SurplusService {
    /// Creates a new surplus service.
    pub fn new(surplus_repo: Arc<SurplusRepository>, task_repo: Arc<TaskRepository>) -> Self {
        Self {
            surplus_repo,
            task_repo,
        }
    }

    /// Creates a new listing for the current donor.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: String,
        description: Option<String>,
        category: ItemCategory,
        quantity: i32,
        unit: String,
        location: String,
        expiry_date: Option<DateTime<Utc>>,
    ) -> Result<Surplus, AppError> {
        let surplus = self
            .surplus_repo
            .create(&CreateSurplus {
                donor_id: ctx.user_id,
                title,
                description,
                category,
                quantity,
                unit,
                location,
                expiry_date,
            })
            .await?;

        info!(surplus_id = %surplus.id, donor_id = %ctx.user_id, "Surplus listed");
        Ok(surplus)
    }

    /// Lists the current donor's listings.
    pub async fn list_mine(
        &self,
        ctx: &RequestContext,
        status: Option<SurplusStatus>,
        category: Option<ItemCategory>,
        page: PageRequest,
    ) -> Result<PageResponse<Surplus>, AppError> {
        self.surplus_repo
            .find_by_donor(ctx.user_id, status, category, &page)
            .await
    }

    /// Gets one of the current donor's listings.
    pub async fn get_mine(&self, ctx: &RequestContext, id: Uuid) -> Result<Surplus, AppError> {
        self.surplus_repo
            .find_by_id_for_donor(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Surplus not found"))
    }

    /// Updates one of the current donor's listings. A `status` field is
    /// only honored for withdrawing a still-available listing.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        fields: UpdateSurplusFields,
    ) -> Result<Surplus, AppError> {
        if let Some(status) = fields.status {
            if status != SurplusStatus::Expired {
                return Err(AppError::validation(
                    "Only 'expired' can be set through this endpoint",
                ));
            }
            let surplus = self.get_mine(ctx, id).await?;
            rules::ensure_expirable(&surplus, ctx.user_id)?;
            return self
                .surplus_repo
                .mark_expired(id, ctx.user_id)
                .await?
                .ok_or_else(|| AppError::validation("Only available listings can be withdrawn"));
        }

        self.surplus_repo
            .update_details(
                id,
                ctx.user_id,
                fields.title.as_deref(),
                fields.description.as_deref(),
                fields.quantity,
                fields.unit.as_deref(),
                fields.location.as_deref(),
                fields.expiry_date,
            )
            .await
    }

    /// Tracking view for one of the donor's listings: the listing, its
    /// task, and the milestone timeline.
    pub async fn track(&self, ctx: &RequestContext, id: Uuid) -> Result<DonationTracking, AppError> {
        let surplus = self.get_mine(ctx, id).await?;
        let task = self.task_repo.find_by_surplus(surplus.id).await?;

        let timeline = DonationTimeline {
            created: surplus.created_at,
            claimed: (surplus.status != SurplusStatus::Available).then_some(surplus.updated_at),
            picked_up: task.as_ref().and_then(|t| t.actual_pickup),
            delivered: task.as_ref().and_then(|t| t.actual_delivery),
        };

        Ok(DonationTracking {
            surplus,
            task,
            timeline,
        })
    }

    /// NGO browse view: claimable listings with filters.
    pub async fn list_available(
        &self,
        category: Option<ItemCategory>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<Surplus>, AppError> {
        self.surplus_repo.find_available(category, search, &page).await
    }
}
