//! Admin handlers — overview, user management, analytics, logs,
//! demand forecast.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::PageResponse;
use givebridge_entity::activity::ActivityLogEntry;
use givebridge_service::admin::forecast::{DemandForecast, generate_forecast};
use givebridge_service::admin::service::{PlatformAnalytics, PlatformOverview};

use crate::dto::request::{ActivityLogQuery, AdminUsersQuery, VerifyUserRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PlatformOverview>>, AppError> {
    require_admin(&auth)?;
    let overview = state.admin_service.overview().await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<AdminUsersQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, AppError> {
    require_admin(&auth)?;

    let role = filters.role.as_deref().map(str::parse).transpose()?;
    let result = state
        .admin_service
        .list_users(
            role,
            filters.is_verified,
            filters.search.as_deref(),
            pagination.into_page_request(),
        )
        .await?;

    let page = result.page;
    let page_size = result.page_size;
    let total = result.total_items;
    let users: Vec<UserResponse> = result.items.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(PageResponse::new(
        users, page, page_size, total,
    ))))
}

/// PATCH /api/admin/verify-user/{id}
pub async fn verify_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<VerifyUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    require_admin(&auth)?;
    let user = state
        .admin_service
        .verify_user(&auth, id, req.is_verified)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "User verification updated",
        user.into(),
    )))
}

/// GET /api/admin/analytics
pub async fn analytics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PlatformAnalytics>>, AppError> {
    require_admin(&auth)?;
    let analytics = state.admin_service.analytics().await?;
    Ok(Json(ApiResponse::ok(analytics)))
}

/// GET /api/admin/logs
pub async fn activity_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<ActivityLogQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ActivityLogEntry>>>, AppError> {
    require_admin(&auth)?;
    let result = state
        .admin_service
        .activity_logs(
            filters.resource_type.as_deref(),
            pagination.into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/admin/forecast
pub async fn demand_forecast(
    State(_state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DemandForecast>>, AppError> {
    require_admin(&auth)?;
    Ok(Json(ApiResponse::ok(generate_forecast())))
}
