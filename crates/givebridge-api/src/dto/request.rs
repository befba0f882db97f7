//! Request DTOs with validation.
//!
//! Enum-valued fields arrive as strings and are parsed in the handlers
//! through the entity `FromStr` impls, so an unrecognized value is a 400
//! rather than a deserialization-level rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Role: donor / ngo / logistics / admin.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Location.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Donor-specific: individual / restaurant / grocery / hotel.
    pub donor_type: Option<String>,
    /// NGO-specific registration identifier.
    pub ngo_registration_id: Option<String>,
    /// Logistics-specific: bike / car / van / truck.
    pub vehicle_type: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New location.
    pub location: Option<String>,
}

/// Create surplus listing request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSurplusRequest {
    /// Listing title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Category.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    /// Quantity on offer.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Quantity unit.
    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,
    /// Pickup location.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Expiry date.
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Update surplus listing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSurplusRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New unit.
    pub unit: Option<String>,
    /// New pickup location.
    pub location: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<DateTime<Utc>>,
    /// Status change; only "expired" is honored.
    pub status: Option<String>,
}

/// NGO claim request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClaimSurplusRequest {
    /// Where the items should be delivered.
    #[validate(length(min = 1, message = "Delivery location is required"))]
    pub delivery_location: String,
}

/// Create need request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNeedRequestBody {
    /// Request title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Needed category.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    /// Needed quantity.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Quantity unit.
    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,
    /// Urgency: low / medium / high / critical.
    #[validate(length(min = 1, message = "Urgency is required"))]
    pub urgency: String,
}

/// Update need request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNeedRequestBody {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New urgency.
    pub urgency: Option<String>,
    /// New status: open / fulfilled / cancelled.
    pub status: Option<String>,
}

/// Logistics status update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTaskStatusRequest {
    /// Target status; parsed against the closed task-status enum.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Admin user verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyUserRequest {
    /// New verification state.
    pub is_verified: bool,
}

/// Start identity verification request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartIdentityRequest {
    /// The 12-digit identity number.
    #[validate(length(equal = 12, message = "Identity number must be 12 digits"))]
    pub aadhaar: String,
}

/// Confirm identity verification request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmIdentityRequest {
    /// The 12-digit identity number.
    #[validate(length(equal = 12, message = "Identity number must be 12 digits"))]
    pub aadhaar: String,
    /// The submitted OTP.
    #[validate(length(equal = 6, message = "OTP must be 6 digits"))]
    pub otp: String,
}

/// Donor surplus list filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorSurplusQuery {
    /// Status filter.
    pub status: Option<String>,
    /// Category filter.
    pub category: Option<String>,
}

/// NGO browse filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSurplusQuery {
    /// Category filter.
    pub category: Option<String>,
    /// Title/description search.
    pub search: Option<String>,
}

/// NGO request list filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeedRequestQuery {
    /// Status filter.
    pub status: Option<String>,
}

/// Logistics my-tasks filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyTasksQuery {
    /// Status filter.
    pub status: Option<String>,
}

/// Admin user list filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUsersQuery {
    /// Role filter.
    pub role: Option<String>,
    /// Verification filter.
    pub is_verified: Option<bool>,
    /// Name/email search.
    pub search: Option<String>,
}

/// Admin activity log filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogQuery {
    /// Resource-type filter.
    pub resource_type: Option<String>,
}
