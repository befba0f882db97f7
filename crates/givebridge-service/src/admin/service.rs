//! Admin supervision — platform overview, user verification,
//! analytics, and the activity log.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_database::repositories::activity::ActivityLogRepository;
use givebridge_database::repositories::request::{RequestRepository, UrgencyCountRow};
use givebridge_database::repositories::surplus::{
    CategoryBreakdownRow, MonthlyTrendRow, SurplusRepository,
};
use givebridge_database::repositories::task::{TaskRepository, TaskStatusCountRow};
use givebridge_database::repositories::user::UserRepository;
use givebridge_entity::activity::{ActivityLogEntry, CreateActivityLogEntry};
use givebridge_entity::notification::NotificationPayload;
use givebridge_entity::surplus::SurplusStatus;
use givebridge_entity::task::TaskStatus;
use givebridge_entity::user::{User, UserRole};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// User counts by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCounts {
    /// All accounts.
    pub total: i64,
    /// Donor accounts.
    pub donors: i64,
    /// NGO accounts.
    pub ngos: i64,
    /// Logistics accounts.
    pub logistics: i64,
}

/// Surplus listing counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusCounts {
    /// All listings.
    pub total: i64,
    /// Currently claimable.
    pub available: i64,
    /// Delivered.
    pub delivered: i64,
}

/// Task counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCounts {
    /// All tasks.
    pub total: i64,
    /// Delivered tasks.
    pub completed: i64,
}

/// The admin dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformOverview {
    /// User counts by role.
    pub users: UserCounts,
    /// Surplus counts.
    pub surplus: SurplusCounts,
    /// Total need requests.
    pub total_requests: i64,
    /// Task counts.
    pub tasks: TaskCounts,
}

/// The admin analytics aggregations.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformAnalytics {
    /// Listings grouped by category.
    pub surplus_by_category: Vec<CategoryBreakdownRow>,
    /// Requests grouped by urgency.
    pub requests_by_urgency: Vec<UrgencyCountRow>,
    /// Tasks grouped by status.
    pub tasks_by_status: Vec<TaskStatusCountRow>,
    /// Listings created per month.
    pub monthly_trends: Vec<MonthlyTrendRow>,
}

/// Admin supervision service.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Surplus repository.
    surplus_repo: Arc<SurplusRepository>,
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Activity log.
    activity_repo: Arc<ActivityLogRepository>,
    /// Notification fan-out.
    notifications: NotificationService,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        surplus_repo: Arc<SurplusRepository>,
        request_repo: Arc<RequestRepository>,
        task_repo: Arc<TaskRepository>,
        activity_repo: Arc<ActivityLogRepository>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            user_repo,
            surplus_repo,
            request_repo,
            task_repo,
            activity_repo,
            notifications,
        }
    }

    /// Platform-wide counts for the admin dashboard.
    pub async fn overview(&self) -> Result<PlatformOverview, AppError> {
        let users = UserCounts {
            total: self.user_repo.count().await?,
            donors: self.user_repo.count_by_role(UserRole::Donor).await?,
            ngos: self.user_repo.count_by_role(UserRole::Ngo).await?,
            logistics: self.user_repo.count_by_role(UserRole::Logistics).await?,
        };

        let surplus = SurplusCounts {
            total: self.surplus_repo.count().await?,
            available: self
                .surplus_repo
                .count_by_status(SurplusStatus::Available)
                .await?,
            delivered: self
                .surplus_repo
                .count_by_status(SurplusStatus::Delivered)
                .await?,
        };

        let tasks = TaskCounts {
            total: self.task_repo.count().await?,
            completed: self.task_repo.count_by_status(TaskStatus::Delivered).await?,
        };

        Ok(PlatformOverview {
            users,
            surplus,
            total_requests: self.request_repo.count().await?,
            tasks,
        })
    }

    /// List platform users with filters.
    pub async fn list_users(
        &self,
        role: Option<UserRole>,
        is_verified: Option<bool>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.user_repo.search(role, is_verified, search, &page).await
    }

    /// Toggle a user's verification flag, recording the action in the
    /// activity log and notifying the user.
    pub async fn verify_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        is_verified: bool,
    ) -> Result<User, AppError> {
        let user = self.user_repo.set_verified(user_id, is_verified).await?;

        let action = if is_verified {
            "user.verify"
        } else {
            "user.unverify"
        };
        self.activity_repo
            .create(&CreateActivityLogEntry {
                actor_id: ctx.user_id,
                action: action.to_string(),
                resource_type: "user".to_string(),
                resource_id: Some(user.id),
                details: None,
            })
            .await?;

        self.notifications
            .record(
                user.id,
                if is_verified {
                    "Account Verified"
                } else {
                    "Account Verification Revoked"
                },
                if is_verified {
                    "Your account has been verified by the platform team."
                } else {
                    "Your account verification has been revoked."
                },
                NotificationPayload::UserVerified { is_verified },
            )
            .await;

        info!(user_id = %user.id, is_verified, "User verification updated");
        Ok(user)
    }

    /// Grouped aggregations for the analytics dashboard.
    pub async fn analytics(&self) -> Result<PlatformAnalytics, AppError> {
        Ok(PlatformAnalytics {
            surplus_by_category: self.surplus_repo.breakdown_by_category().await?,
            requests_by_urgency: self.request_repo.breakdown_by_urgency().await?,
            tasks_by_status: self.task_repo.breakdown_by_status().await?,
            monthly_trends: self.surplus_repo.monthly_trend().await?,
        })
    }

    /// Recent activity log entries, optionally filtered by resource type.
    pub async fn activity_logs(
        &self,
        resource_type: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<ActivityLogEntry>, AppError> {
        self.activity_repo.find_recent(resource_type, &page).await
    }
}
