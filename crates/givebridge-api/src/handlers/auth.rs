//! Auth handlers — register, login, profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use givebridge_core::error::AppError;
use givebridge_service::user::service::Registration;

use crate::dto::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::validation_failed;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), AppError> {
    req.validate().map_err(validation_failed)?;

    let role = req.role.parse()?;
    let donor_type = req.donor_type.as_deref().map(str::parse).transpose()?;
    let vehicle_type = req.vehicle_type.as_deref().map(str::parse).transpose()?;

    let authed = state
        .user_service
        .register(Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            role,
            location: req.location,
            donor_type,
            ngo_registration_id: req.ngo_registration_id,
            vehicle_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "User registered successfully",
            AuthResponse {
                token: authed.token.token,
                expires_at: authed.token.expires_at,
                user: authed.user.into(),
            },
        )),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    req.validate().map_err(validation_failed)?;

    let authed = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::with_message(
        "Login successful",
        AuthResponse {
            token: authed.token.token,
            expires_at: authed.token.expires_at,
            user: authed.user.into(),
        },
    )))
}

/// GET /api/auth/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state
        .user_service
        .update_profile(&auth, req.name, req.location)
        .await?;
    Ok(Json(ApiResponse::with_message("Profile updated", user.into())))
}
