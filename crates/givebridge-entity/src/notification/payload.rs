//! Typed notification payloads.
//!
//! Each notification carries a structured payload serialized to JSONB.
//! The tagged union keeps every payload shape explicit instead of an
//! opaque JSON blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::NotificationKind;

/// Structured data attached to a notification, one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NotificationPayload {
    /// An NGO claimed a listing.
    SurplusClaimed {
        /// The claimed listing.
        surplus_id: Uuid,
        /// The task spawned by the claim.
        task_id: Uuid,
        /// The claiming NGO.
        ngo_id: Uuid,
        /// The NGO's display name.
        ngo_name: String,
    },
    /// The donor approved the claim.
    ClaimAccepted {
        /// The accepted listing.
        surplus_id: Uuid,
        /// The associated task.
        task_id: Uuid,
    },
    /// The donor rejected the claim.
    ClaimRejected {
        /// The listing returned to `available`.
        surplus_id: Uuid,
    },
    /// A logistics partner took the delivery task.
    TaskAccepted {
        /// The listing being delivered.
        surplus_id: Uuid,
        /// The accepted task.
        task_id: Uuid,
        /// The accepting partner.
        logistics_partner_id: Uuid,
    },
    /// The items were picked up.
    PickupCompleted {
        /// The listing in transit.
        surplus_id: Uuid,
        /// The task.
        task_id: Uuid,
        /// Pickup time.
        picked_up_at: DateTime<Utc>,
    },
    /// The items were delivered.
    DeliveryCompleted {
        /// The delivered listing.
        surplus_id: Uuid,
        /// The task.
        task_id: Uuid,
        /// Delivery time.
        delivered_at: DateTime<Utc>,
    },
    /// An admin changed the account's verification flag.
    UserVerified {
        /// New verification state.
        is_verified: bool,
    },
}

impl NotificationPayload {
    /// The notification kind this payload belongs to.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::SurplusClaimed { .. } => NotificationKind::SurplusClaimed,
            Self::ClaimAccepted { .. } => NotificationKind::ClaimAccepted,
            Self::ClaimRejected { .. } => NotificationKind::ClaimRejected,
            Self::TaskAccepted { .. } => NotificationKind::TaskAccepted,
            Self::PickupCompleted { .. } => NotificationKind::PickupCompleted,
            Self::DeliveryCompleted { .. } => NotificationKind::DeliveryCompleted,
            Self::UserVerified { .. } => NotificationKind::UserVerified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_kind_mapping() {
        let payload = NotificationPayload::ClaimRejected {
            surplus_id: Uuid::new_v4(),
        };
        assert_eq!(payload.kind(), NotificationKind::ClaimRejected);
    }

    #[test]
    fn test_tagged_serialization_round_trip() {
        let payload = NotificationPayload::TaskAccepted {
            surplus_id: Uuid::new_v4(),
            task_id: Uuid::new_v4(),
            logistics_partner_id: Uuid::new_v4(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "task-accepted");
        let back: NotificationPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back, payload);
    }
}
