//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use givebridge_auth::jwt::decoder::JwtDecoder;
use givebridge_core::config::AppConfig;
use givebridge_service::admin::AdminService;
use givebridge_service::identity::IdentityService;
use givebridge_service::impact::ImpactService;
use givebridge_service::notification::NotificationService;
use givebridge_service::request::RequestService;
use givebridge_service::surplus::SurplusService;
use givebridge_service::user::UserService;
use givebridge_service::workflow::WorkflowService;

use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped or internally shared for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Rate limiter for OTP issue requests.
    pub otp_limiter: RateLimiter,

    // ── Services ─────────────────────────────────────────────
    /// Account registration/login/profile.
    pub user_service: Arc<UserService>,
    /// Surplus listing reads and donor edits.
    pub surplus_service: Arc<SurplusService>,
    /// NGO need requests.
    pub request_service: Arc<RequestService>,
    /// Donation workflow transitions.
    pub workflow_service: Arc<WorkflowService>,
    /// Impact aggregations.
    pub impact_service: Arc<ImpactService>,
    /// Notifications.
    pub notification_service: Arc<NotificationService>,
    /// Admin supervision.
    pub admin_service: Arc<AdminService>,
    /// Donor identity verification.
    pub identity_service: Arc<IdentityService>,
}
