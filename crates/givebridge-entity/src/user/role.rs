//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// Every route group is gated on exactly one of these; `Admin` additionally
/// supervises the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Lists surplus goods and decides on NGO claims.
    Donor,
    /// Claims surplus and files need requests.
    Ngo,
    /// Delivers claimed surplus from donor to NGO.
    Logistics,
    /// Supervises users, analytics, and the activity log.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Ngo => "ngo",
            Self::Logistics => "logistics",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "ngo" => Ok(Self::Ngo),
            "logistics" => Ok(Self::Logistics),
            "admin" => Ok(Self::Admin),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: donor, ngo, logistics, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("donor".parse::<UserRole>().unwrap(), UserRole::Donor);
        assert_eq!("NGO".parse::<UserRole>().unwrap(), UserRole::Ngo);
        assert!("driver".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for role in [
            UserRole::Donor,
            UserRole::Ngo,
            UserRole::Logistics,
            UserRole::Admin,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }
}
