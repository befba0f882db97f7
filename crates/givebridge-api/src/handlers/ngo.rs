//! NGO handlers — browsing, claiming, need requests, impact.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::PageResponse;
use givebridge_entity::request::NeedRequest;
use givebridge_entity::surplus::Surplus;
use givebridge_service::impact::service::NgoImpact;
use givebridge_service::request::service::UpdateRequestFields;

use crate::dto::request::{
    AvailableSurplusQuery, ClaimSurplusRequest, CreateNeedRequestBody, NeedRequestQuery,
    UpdateNeedRequestBody,
};
use crate::dto::response::{ApiResponse, ClaimResponse};
use crate::error::validation_failed;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_ngo;
use crate::state::AppState;

/// GET /api/ngo/surplus
pub async fn available_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<AvailableSurplusQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Surplus>>>, AppError> {
    require_ngo(&auth)?;

    let category = filters.category.as_deref().map(str::parse).transpose()?;
    let result = state
        .surplus_service
        .list_available(
            category,
            filters.search.as_deref(),
            pagination.into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/ngo/claim/{id}
pub async fn claim_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ClaimSurplusRequest>,
) -> Result<Json<ApiResponse<ClaimResponse>>, AppError> {
    require_ngo(&auth)?;
    req.validate().map_err(validation_failed)?;

    let (surplus, task) = state
        .workflow_service
        .claim(&auth, id, req.delivery_location)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Surplus claimed successfully. Donor has been notified.",
        ClaimResponse { surplus, task },
    )))
}

/// POST /api/ngo/requests
pub async fn create_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNeedRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<NeedRequest>>), AppError> {
    require_ngo(&auth)?;
    req.validate().map_err(validation_failed)?;

    let category = req.category.parse()?;
    let urgency = req.urgency.parse()?;

    let request = state
        .request_service
        .create(
            &auth,
            req.title,
            req.description,
            category,
            req.quantity,
            req.unit,
            urgency,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Request created successfully",
            request,
        )),
    ))
}

/// GET /api/ngo/requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<NeedRequestQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<NeedRequest>>>, AppError> {
    require_ngo(&auth)?;

    let status = filters.status.as_deref().map(str::parse).transpose()?;
    let result = state
        .request_service
        .list_mine(&auth, status, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// PATCH /api/ngo/requests/{id}
pub async fn update_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNeedRequestBody>,
) -> Result<Json<ApiResponse<NeedRequest>>, AppError> {
    require_ngo(&auth)?;

    let urgency = req.urgency.as_deref().map(str::parse).transpose()?;
    let status = req.status.as_deref().map(str::parse).transpose()?;

    let request = state
        .request_service
        .update(
            &auth,
            id,
            UpdateRequestFields {
                title: req.title,
                description: req.description,
                quantity: req.quantity,
                urgency,
                status,
            },
        )
        .await?;
    Ok(Json(ApiResponse::with_message("Request updated", request)))
}

/// GET /api/ngo/impact
pub async fn impact(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NgoImpact>>, AppError> {
    require_ngo(&auth)?;
    let impact = state.impact_service.ngo_impact(&auth).await?;
    Ok(Json(ApiResponse::ok(impact)))
}

/// GET /api/ngo/urgent-needs
pub async fn urgent_needs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<NeedRequest>>>, AppError> {
    require_ngo(&auth)?;
    let requests = state.request_service.urgent_needs().await?;
    Ok(Json(ApiResponse::ok(requests)))
}
