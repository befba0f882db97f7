//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use givebridge_auth::jwt::decoder::JwtDecoder;
use givebridge_auth::jwt::encoder::JwtEncoder;
use givebridge_auth::otp::OtpStore;
use givebridge_auth::password::{PasswordHasher, PasswordValidator};
use givebridge_core::config::AppConfig;
use givebridge_core::error::AppError;
use givebridge_database::repositories::{
    activity, identity, notification, request, surplus, task, user, workflow,
};
use givebridge_service::admin::AdminService;
use givebridge_service::identity::IdentityService;
use givebridge_service::impact::ImpactService;
use givebridge_service::notification::NotificationService;
use givebridge_service::request::RequestService;
use givebridge_service::surplus::SurplusService;
use givebridge_service::user::UserService;
use givebridge_service::workflow::WorkflowService;

use crate::middleware::rate_limit::RateLimiter;
use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(user::UserRepository::new(db_pool.clone()));
    let surplus_repo = Arc::new(surplus::SurplusRepository::new(db_pool.clone()));
    let task_repo = Arc::new(task::TaskRepository::new(db_pool.clone()));
    let request_repo = Arc::new(request::RequestRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(notification::NotificationRepository::new(db_pool.clone()));
    let activity_repo = Arc::new(activity::ActivityLogRepository::new(db_pool.clone()));
    let identity_repo = Arc::new(identity::IdentityRepository::new(db_pool.clone()));
    let workflow_repo = Arc::new(workflow::WorkflowRepository::new(db_pool.clone()));

    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let otp_store = OtpStore::new(&config.identity);
    let otp_limiter = RateLimiter::per_window(
        config.identity.otp_rate_limit_max,
        config.identity.otp_rate_limit_window_minutes * 60,
    );

    // ── Services ─────────────────────────────────────────────────
    let notification_service =
        NotificationService::new(Arc::clone(&notification_repo));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let surplus_service = Arc::new(SurplusService::new(
        Arc::clone(&surplus_repo),
        Arc::clone(&task_repo),
    ));
    let request_service = Arc::new(RequestService::new(Arc::clone(&request_repo)));
    let workflow_service = Arc::new(WorkflowService::new(
        Arc::clone(&surplus_repo),
        Arc::clone(&task_repo),
        Arc::clone(&workflow_repo),
        Arc::clone(&user_repo),
        notification_service.clone(),
        Arc::clone(&activity_repo),
    ));
    let impact_service = Arc::new(ImpactService::new(
        Arc::clone(&surplus_repo),
        Arc::clone(&request_repo),
        Arc::clone(&task_repo),
        config.impact.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&user_repo),
        Arc::clone(&surplus_repo),
        Arc::clone(&request_repo),
        Arc::clone(&task_repo),
        Arc::clone(&activity_repo),
        notification_service.clone(),
    ));
    let identity_service = Arc::new(IdentityService::new(
        Arc::clone(&identity_repo),
        Arc::clone(&user_repo),
        otp_store,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        otp_limiter,
        user_service,
        surplus_service,
        request_service,
        workflow_service,
        impact_service,
        notification_service: Arc::new(notification_service),
        admin_service,
        identity_service,
    }
}

/// Runs the GiveBridge server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("GiveBridge server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("GiveBridge server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
