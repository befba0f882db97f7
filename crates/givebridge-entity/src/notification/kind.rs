//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a user-facing notification, one per workflow transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// An NGO claimed a donor's listing (sent to the donor).
    SurplusClaimed,
    /// The donor approved a claim (sent to the NGO).
    ClaimAccepted,
    /// The donor rejected a claim (sent to the NGO).
    ClaimRejected,
    /// A logistics partner took the delivery task (sent to donor and NGO).
    TaskAccepted,
    /// The items were picked up (sent to donor and NGO).
    PickupCompleted,
    /// The items were delivered (sent to donor and NGO).
    DeliveryCompleted,
    /// An admin changed the account's verification flag.
    UserVerified,
}

impl NotificationKind {
    /// Return the kind as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SurplusClaimed => "surplus-claimed",
            Self::ClaimAccepted => "claim-accepted",
            Self::ClaimRejected => "claim-rejected",
            Self::TaskAccepted => "task-accepted",
            Self::PickupCompleted => "pickup-completed",
            Self::DeliveryCompleted => "delivery-completed",
            Self::UserVerified => "user-verified",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
