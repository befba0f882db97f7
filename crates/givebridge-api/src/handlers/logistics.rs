//! Logistics handlers — task board, acceptance, status updates,
//! performance.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::PageResponse;
use givebridge_entity::task::{Task, TaskStatus};
use givebridge_service::impact::service::PartnerPerformance;

use crate::dto::request::{MyTasksQuery, UpdateTaskStatusRequest};
use crate::dto::response::ApiResponse;
use crate::error::validation_failed;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_logistics;
use crate::state::AppState;

/// GET /api/logistics/tasks
pub async fn available_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Task>>>, AppError> {
    require_logistics(&auth)?;
    let result = state
        .workflow_service
        .available_tasks(pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/logistics/my-tasks
pub async fn my_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<MyTasksQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Task>>>, AppError> {
    require_logistics(&auth)?;

    let status = filters.status.as_deref().map(str::parse).transpose()?;
    let result = state
        .workflow_service
        .partner_tasks(&auth, status, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/logistics/tasks/accept/{id}
pub async fn accept_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    require_logistics(&auth)?;
    let task = state.workflow_service.accept_task(&auth, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Task accepted. Please proceed to pickup location.",
        task,
    )))
}

/// PATCH /api/logistics/tasks/status/{id}
pub async fn update_task_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskStatusRequest>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    require_logistics(&auth)?;
    req.validate().map_err(validation_failed)?;

    // Closed enum: an unrecognized status string is a 400 here, before
    // any transition logic runs.
    let target: TaskStatus = req.status.parse()?;

    let task = state
        .workflow_service
        .update_task_status(&auth, id, target)
        .await?;
    Ok(Json(ApiResponse::with_message("Status updated", task)))
}

/// GET /api/logistics/performance
pub async fn performance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PartnerPerformance>>, AppError> {
    require_logistics(&auth)?;
    let perf = state.impact_service.partner_performance(&auth).await?;
    Ok(Json(ApiResponse::ok(perf)))
}
