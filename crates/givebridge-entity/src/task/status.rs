//! Delivery task status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a delivery task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created by an NGO claim, awaiting the donor's decision.
    Pending,
    /// Approved and/or assigned to a logistics partner.
    Assigned,
    /// Picked up from the donor.
    PickedUp,
    /// On the way to the NGO.
    InTransit,
    /// Handed over to the NGO.
    Delivered,
    /// Cancelled.
    Cancelled,
}

impl TaskStatus {
    /// Check if the task is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Check if a logistics partner may take the task in this state.
    pub fn is_open_for_assignment(&self) -> bool {
        matches!(self, Self::Pending | Self::Assigned)
    }

    /// Return the status as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::PickedUp => "picked-up",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "picked-up" => Ok(Self::PickedUp),
            "in-transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid task status: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_for_assignment() {
        assert!(TaskStatus::Pending.is_open_for_assignment());
        assert!(TaskStatus::Assigned.is_open_for_assignment());
        assert!(!TaskStatus::PickedUp.is_open_for_assignment());
        assert!(!TaskStatus::Delivered.is_open_for_assignment());
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("shipped".parse::<TaskStatus>().is_err());
        assert!("picked_up".parse::<TaskStatus>().is_err());
    }
}
