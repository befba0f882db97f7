//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use givebridge_entity::surplus::Surplus;
use givebridge_entity::task::Task;
use givebridge_entity::user::User;

/// Standard success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Creates a successful response with a message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// User summary for responses (never includes credential material).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: String,
    /// Location.
    pub location: String,
    /// Admin verification flag.
    pub is_verified: bool,
    /// Donor-specific attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_type: Option<String>,
    /// NGO-specific attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_registration_id: Option<String>,
    /// Logistics-specific attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Identity verification flag.
    pub is_aadhaar_verified: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            location: user.location,
            is_verified: user.is_verified,
            donor_type: user.donor_type.map(|t| t.to_string()),
            ngo_registration_id: user.ngo_registration_id,
            vehicle_type: user.vehicle_type.map(|t| t.to_string()),
            is_aadhaar_verified: user.is_aadhaar_verified,
            created_at: user.created_at,
        }
    }
}

/// Registration/login response: token plus profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The account.
    pub user: UserResponse,
}

/// Claim response: the claimed listing and its spawned task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// The claimed listing.
    pub surplus: Surplus,
    /// The spawned delivery task.
    pub task: Task,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
