//! Impact aggregation — donor impact, NGO impact, and logistics
//! performance. Computed against the live tables at request time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use givebridge_core::config::impact::ImpactConfig;
use givebridge_core::error::AppError;
use givebridge_database::repositories::request::RequestRepository;
use givebridge_database::repositories::surplus::SurplusRepository;
use givebridge_database::repositories::task::TaskRepository;
use givebridge_entity::surplus::SurplusStatus;

use crate::context::RequestContext;

use super::badges::{Badge, badges_for};

/// Donor impact summary.
///
/// A donation counts once it is actually moving: listings still sitting
/// at `available`/`claimed`/`accepted` are excluded from the headline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorImpact {
    /// Donations in transit or delivered.
    pub total_donations: i64,
    /// Delivered donations.
    pub delivered_donations: i64,
    /// Total delivered quantity.
    pub total_quantity: i64,
    /// Earned badges.
    pub badges: Vec<Badge>,
}

/// NGO impact summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgoImpact {
    /// Requests filed.
    pub total_requests: i64,
    /// Requests marked fulfilled.
    pub fulfilled_requests: i64,
    /// Delivered items received.
    pub received_items: i64,
    /// Total received quantity.
    pub total_quantity: i64,
    /// Estimated people served (quantity × configured multiplier).
    pub estimated_people_served: i64,
}

/// Logistics partner performance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerPerformance {
    /// All tasks ever assigned to the partner.
    pub total_tasks: i64,
    /// Delivered tasks.
    pub completed_tasks: i64,
    /// Deliveries at or before the scheduled time.
    pub on_time_tasks: i64,
    /// Completion percentage (0–100).
    pub completion_rate: f64,
    /// Derived 0–5 rating.
    pub rating: f64,
}

/// Compute the completion percentage and derived rating.
fn completion_metrics(total: i64, completed: i64) -> (f64, f64) {
    if total <= 0 {
        return (0.0, 0.0);
    }
    let rate = completed as f64 / total as f64;
    (rate * 100.0, rate * 5.0)
}

/// Computes impact aggregations for every role.
#[derive(Debug, Clone)]
pub struct ImpactService {
    /// Surplus repository.
    surplus_repo: Arc<SurplusRepository>,
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Badge thresholds and multipliers.
    config: ImpactConfig,
}

impl ImpactService {
    /// Creates a new impact service.
    pub fn new(
        surplus_repo: Arc<SurplusRepository>,
        request_repo: Arc<RequestRepository>,
        task_repo: Arc<TaskRepository>,
        config: ImpactConfig,
    ) -> Self {
        Self {
            surplus_repo,
            request_repo,
            task_repo,
            config,
        }
    }

    /// Donor impact: moving/delivered counts, delivered quantity, badges.
    pub async fn donor_impact(&self, ctx: &RequestContext) -> Result<DonorImpact, AppError> {
        let total_donations = self
            .surplus_repo
            .count_by_donor_in_statuses(
                ctx.user_id,
                &[SurplusStatus::InTransit, SurplusStatus::Delivered],
            )
            .await?;
        let delivered_donations = self
            .surplus_repo
            .count_by_donor_in_statuses(ctx.user_id, &[SurplusStatus::Delivered])
            .await?;
        let total_quantity = self
            .surplus_repo
            .delivered_quantity_by_donor(ctx.user_id)
            .await?;

        Ok(DonorImpact {
            total_donations,
            delivered_donations,
            total_quantity,
            badges: badges_for(delivered_donations, &self.config),
        })
    }

    /// NGO impact: request and received-item aggregates.
    pub async fn ngo_impact(&self, ctx: &RequestContext) -> Result<NgoImpact, AppError> {
        let total_requests = self.request_repo.count_by_ngo(ctx.user_id).await?;
        let fulfilled_requests = self.request_repo.count_fulfilled_by_ngo(ctx.user_id).await?;
        let received_items = self.surplus_repo.count_received_by_ngo(ctx.user_id).await?;
        let total_quantity = self.surplus_repo.received_quantity_by_ngo(ctx.user_id).await?;

        Ok(NgoImpact {
            total_requests,
            fulfilled_requests,
            received_items,
            total_quantity,
            estimated_people_served: total_quantity * self.config.people_served_multiplier,
        })
    }

    /// Logistics performance: totals, completion rate, derived rating.
    pub async fn partner_performance(
        &self,
        ctx: &RequestContext,
    ) -> Result<PartnerPerformance, AppError> {
        let total_tasks = self.task_repo.count_by_partner(ctx.user_id).await?;
        let completed_tasks = self.task_repo.count_delivered_by_partner(ctx.user_id).await?;
        let on_time_tasks = self.task_repo.count_on_time_by_partner(ctx.user_id).await?;

        let (completion_rate, rating) = completion_metrics(total_tasks, completed_tasks);

        Ok(PartnerPerformance {
            total_tasks,
            completed_tasks,
            on_time_tasks,
            completion_rate,
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_metrics() {
        let (rate, rating) = completion_metrics(10, 8);
        assert!((rate - 80.0).abs() < f64::EPSILON);
        assert!((rating - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_metrics_no_tasks() {
        assert_eq!(completion_metrics(0, 0), (0.0, 0.0));
    }
}
