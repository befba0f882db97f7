//! Route definitions for the GiveBridge HTTP API.
//!
//! All routes are organized by role and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(donor_routes())
        .merge(ngo_routes())
        .merge(logistics_routes())
        .merge(admin_routes())
        .merge(notification_routes())
        .merge(identity_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/profile", get(handlers::auth::get_profile))
        .route("/auth/profile", patch(handlers::auth::update_profile))
}

/// Donor endpoints: listings, claim decisions, impact, tracking
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donor/surplus", post(handlers::donor::create_surplus))
        .route("/donor/surplus", get(handlers::donor::list_surplus))
        .route("/donor/surplus/{id}", get(handlers::donor::get_surplus))
        .route("/donor/surplus/{id}", patch(handlers::donor::update_surplus))
        .route(
            "/donor/surplus/{id}/accept",
            post(handlers::donor::accept_claim),
        )
        .route(
            "/donor/surplus/{id}/reject",
            post(handlers::donor::reject_claim),
        )
        .route("/donor/impact", get(handlers::donor::impact))
        .route("/donor/tracking/{id}", get(handlers::donor::tracking))
}

/// NGO endpoints: browse, claim, need requests, impact
fn ngo_routes() -> Router<AppState> {
    Router::new()
        .route("/ngo/surplus", get(handlers::ngo::available_surplus))
        .route("/ngo/claim/{id}", post(handlers::ngo::claim_surplus))
        .route("/ngo/requests", post(handlers::ngo::create_request))
        .route("/ngo/requests", get(handlers::ngo::list_requests))
        .route("/ngo/requests/{id}", patch(handlers::ngo::update_request))
        .route("/ngo/impact", get(handlers::ngo::impact))
        .route("/ngo/urgent-needs", get(handlers::ngo::urgent_needs))
}

/// Logistics endpoints: task board, acceptance, status, performance
fn logistics_routes() -> Router<AppState> {
    Router::new()
        .route("/logistics/tasks", get(handlers::logistics::available_tasks))
        .route("/logistics/my-tasks", get(handlers::logistics::my_tasks))
        .route(
            "/logistics/tasks/accept/{id}",
            post(handlers::logistics::accept_task),
        )
        .route(
            "/logistics/tasks/status/{id}",
            patch(handlers::logistics::update_task_status),
        )
        .route(
            "/logistics/performance",
            get(handlers::logistics::performance),
        )
}

/// Admin endpoints: overview, users, analytics, logs, forecast
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(handlers::admin::overview))
        .route("/admin/users", get(handlers::admin::list_users))
        .route(
            "/admin/verify-user/{id}",
            patch(handlers::admin::verify_user),
        )
        .route("/admin/analytics", get(handlers::admin::analytics))
        .route("/admin/logs", get(handlers::admin::activity_logs))
        .route("/admin/forecast", get(handlers::admin::demand_forecast))
}

/// Notification endpoints (any authenticated role)
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            patch(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            patch(handlers::notification::mark_all_read),
        )
}

/// Donor identity verification endpoints (mock OTP flow)
fn identity_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/aadhaar/start-aadhaar-verify",
            post(handlers::identity::start_verification),
        )
        .route(
            "/aadhaar/confirm-aadhaar-verify",
            post(handlers::identity::confirm_verification),
        )
        .route(
            "/aadhaar/aadhaar-status",
            get(handlers::identity::verification_status),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
