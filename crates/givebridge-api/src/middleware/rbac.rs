//! Role guards for route groups.

use givebridge_core::error::AppError;
use givebridge_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user is a donor.
pub fn require_donor(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Donor {
        return Err(AppError::forbidden("Donor access required"));
    }
    Ok(())
}

/// Checks that the authenticated user is an NGO.
pub fn require_ngo(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Ngo {
        return Err(AppError::forbidden("NGO access required"));
    }
    Ok(())
}

/// Checks that the authenticated user is a logistics partner.
pub fn require_logistics(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Logistics {
        return Err(AppError::forbidden("Logistics access required"));
    }
    Ok(())
}

/// Checks that the authenticated user is an admin.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}
