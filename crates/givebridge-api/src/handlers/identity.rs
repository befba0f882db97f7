//! Donor identity verification handlers (mock OTP flow).

use axum::Json;
use axum::extract::State;
use validator::Validate;

use givebridge_core::error::AppError;
use givebridge_service::identity::service::{IdentityStatus, OtpIssued};

use crate::dto::request::{ConfirmIdentityRequest, StartIdentityRequest};
use crate::dto::response::ApiResponse;
use crate::error::validation_failed;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_donor;
use crate::state::AppState;

/// POST /api/aadhaar/start-aadhaar-verify
///
/// OTP issuance is rate-limited per user.
pub async fn start_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<StartIdentityRequest>,
) -> Result<Json<ApiResponse<OtpIssued>>, AppError> {
    require_donor(&auth)?;
    req.validate().map_err(validation_failed)?;

    if !state.otp_limiter.check(&auth.user_id.to_string()).await {
        return Err(AppError::rate_limited(
            "Too many OTP requests, please try again later",
        ));
    }

    let issued = state.identity_service.start(&auth, &req.aadhaar).await?;
    Ok(Json(ApiResponse::with_message(
        format!(
            "OTP sent to your linked phone number ending in {}",
            &issued.masked_phone[issued.masked_phone.len() - 4..]
        ),
        issued,
    )))
}

/// POST /api/aadhaar/confirm-aadhaar-verify
pub async fn confirm_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ConfirmIdentityRequest>,
) -> Result<Json<ApiResponse<IdentityStatus>>, AppError> {
    require_donor(&auth)?;
    req.validate().map_err(validation_failed)?;

    let status = state
        .identity_service
        .confirm(&auth, &req.aadhaar, &req.otp)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Identity verified successfully",
        status,
    )))
}

/// GET /api/aadhaar/aadhaar-status
pub async fn verification_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<IdentityStatus>>, AppError> {
    require_donor(&auth)?;
    let status = state.identity_service.status(&auth).await?;
    Ok(Json(ApiResponse::ok(status)))
}
