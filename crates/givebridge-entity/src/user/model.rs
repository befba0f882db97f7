//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::profile::{DonorType, VehicleType};
use super::role::UserRole;

/// A registered platform account.
///
/// One row per account; role-specific attributes are nullable columns
/// populated according to `role`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, stored lowercased).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Platform role.
    pub role: UserRole,
    /// Free-form location string.
    pub location: String,
    /// Whether an admin has verified this account.
    pub is_verified: bool,
    /// Donor-specific: kind of donor.
    pub donor_type: Option<DonorType>,
    /// NGO-specific: government registration identifier.
    pub ngo_registration_id: Option<String>,
    /// Logistics-specific: vehicle class operated.
    pub vehicle_type: Option<VehicleType>,
    /// Masked identity number (e.g. `XXXX-XXXX-1234`), once verified.
    pub aadhaar_masked: Option<String>,
    /// SHA-256 hash of the identity number.
    #[serde(skip_serializing)]
    pub aadhaar_hash: Option<String>,
    /// Whether the identity-number OTP flow has completed.
    pub is_aadhaar_verified: bool,
    /// When identity verification completed.
    pub aadhaar_verified_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is a donor.
    pub fn is_donor(&self) -> bool {
        self.role == UserRole::Donor
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Platform role.
    pub role: UserRole,
    /// Location string.
    pub location: String,
    /// Donor-specific attribute.
    pub donor_type: Option<DonorType>,
    /// NGO-specific attribute.
    pub ngo_registration_id: Option<String>,
    /// Logistics-specific attribute.
    pub vehicle_type: Option<VehicleType>,
}
