//! Donor handlers — listing CRUD, claim decisions, impact, tracking.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use givebridge_core::error::AppError;
use givebridge_core::types::pagination::PageResponse;
use givebridge_entity::surplus::Surplus;
use givebridge_service::impact::service::DonorImpact;
use givebridge_service::surplus::service::{DonationTracking, UpdateSurplusFields};

use crate::dto::request::{CreateSurplusRequest, DonorSurplusQuery, UpdateSurplusRequest};
use crate::dto::response::{ApiResponse, ClaimResponse};
use crate::error::validation_failed;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_donor;
use crate::state::AppState;

/// POST /api/donor/surplus
pub async fn create_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSurplusRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Surplus>>), AppError> {
    require_donor(&auth)?;
    req.validate().map_err(validation_failed)?;

    let category = req.category.parse()?;
    let surplus = state
        .surplus_service
        .create(
            &auth,
            req.title,
            req.description,
            category,
            req.quantity,
            req.unit,
            req.location,
            req.expiry_date,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Surplus item created successfully",
            surplus,
        )),
    ))
}

/// GET /api/donor/surplus
pub async fn list_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<DonorSurplusQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Surplus>>>, AppError> {
    require_donor(&auth)?;

    let status = filters.status.as_deref().map(str::parse).transpose()?;
    let category = filters.category.as_deref().map(str::parse).transpose()?;

    let result = state
        .surplus_service
        .list_mine(&auth, status, category, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/donor/surplus/{id}
pub async fn get_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Surplus>>, AppError> {
    require_donor(&auth)?;
    let surplus = state.surplus_service.get_mine(&auth, id).await?;
    Ok(Json(ApiResponse::ok(surplus)))
}

/// PATCH /api/donor/surplus/{id}
pub async fn update_surplus(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSurplusRequest>,
) -> Result<Json<ApiResponse<Surplus>>, AppError> {
    require_donor(&auth)?;

    let status = req.status.as_deref().map(str::parse).transpose()?;
    let surplus = state
        .surplus_service
        .update(
            &auth,
            id,
            UpdateSurplusFields {
                title: req.title,
                description: req.description,
                quantity: req.quantity,
                unit: req.unit,
                location: req.location,
                expiry_date: req.expiry_date,
                status,
            },
        )
        .await?;
    Ok(Json(ApiResponse::with_message("Surplus updated", surplus)))
}

/// POST /api/donor/surplus/{id}/accept
pub async fn accept_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ClaimResponse>>, AppError> {
    require_donor(&auth)?;
    let (surplus, task) = state.workflow_service.accept_claim(&auth, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Claim accepted. The NGO has been notified.",
        ClaimResponse { surplus, task },
    )))
}

/// POST /api/donor/surplus/{id}/reject
pub async fn reject_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Surplus>>, AppError> {
    require_donor(&auth)?;
    let surplus = state.workflow_service.reject_claim(&auth, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Claim rejected. The item is available again.",
        surplus,
    )))
}

/// GET /api/donor/impact
pub async fn impact(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DonorImpact>>, AppError> {
    require_donor(&auth)?;
    let impact = state.impact_service.donor_impact(&auth).await?;
    Ok(Json(ApiResponse::ok(impact)))
}

/// GET /api/donor/tracking/{id}
pub async fn tracking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DonationTracking>>, AppError> {
    require_donor(&auth)?;
    let tracking = state.surplus_service.track(&auth, id).await?;
    Ok(Json(ApiResponse::ok(tracking)))
}
