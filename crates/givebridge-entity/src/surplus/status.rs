//! Surplus listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Disposition of a surplus listing as it moves from listing to delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "surplus_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SurplusStatus {
    /// Listed by the donor, open for NGO claims.
    Available,
    /// Reserved by an NGO, awaiting the donor's decision.
    Claimed,
    /// Claim approved by the donor, awaiting pickup.
    Accepted,
    /// Picked up by a logistics partner.
    InTransit,
    /// Handed over to the claiming NGO.
    Delivered,
    /// Withdrawn or past its expiry date.
    Expired,
}

impl SurplusStatus {
    /// Check if the listing is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Expired)
    }

    /// Check if an NGO may claim the listing in this state.
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Return the status as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::Accepted => "accepted",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for SurplusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SurplusStatus {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "claimed" => Ok(Self::Claimed),
            "accepted" => Ok(Self::Accepted),
            "in-transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "expired" => Ok(Self::Expired),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid surplus status: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(SurplusStatus::Delivered.is_terminal());
        assert!(SurplusStatus::Expired.is_terminal());
        assert!(!SurplusStatus::InTransit.is_terminal());
    }

    #[test]
    fn test_kebab_case_round_trip() {
        assert_eq!(
            "in-transit".parse::<SurplusStatus>().unwrap(),
            SurplusStatus::InTransit
        );
        assert_eq!(SurplusStatus::InTransit.as_str(), "in-transit");
        assert!("in_transit".parse::<SurplusStatus>().is_err());
    }
}
