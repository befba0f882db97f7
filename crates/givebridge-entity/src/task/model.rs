//! Delivery task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;

/// A delivery assignment binding a claimed surplus to a logistics partner.
///
/// Derived 1:1 from a claimed [`crate::surplus::Surplus`]; deleted if the
/// donor rejects the claim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// The surplus listing this task delivers (unique per task).
    pub surplus_id: Uuid,
    /// The listing donor.
    pub donor_id: Uuid,
    /// The claiming NGO.
    pub ngo_id: Uuid,
    /// The logistics partner, once one accepts the task.
    pub logistics_partner_id: Option<Uuid>,
    /// Current task status.
    pub status: TaskStatus,
    /// Where to collect the items.
    pub pickup_location: String,
    /// Where to deliver the items.
    pub delivery_location: String,
    /// Planned delivery time (if scheduled).
    pub scheduled_delivery: Option<DateTime<Utc>>,
    /// When the items were actually picked up.
    pub actual_pickup: Option<DateTime<Utc>>,
    /// When the items were actually delivered.
    pub actual_delivery: Option<DateTime<Utc>>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check whether the delivery completed on or before its scheduled time.
    pub fn was_on_time(&self) -> bool {
        match (self.actual_delivery, self.scheduled_delivery) {
            (Some(actual), Some(scheduled)) => actual <= scheduled,
            _ => false,
        }
    }
}

/// Data required to create a new delivery task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// The surplus being delivered.
    pub surplus_id: Uuid,
    /// The listing donor.
    pub donor_id: Uuid,
    /// The claiming NGO.
    pub ngo_id: Uuid,
    /// Pickup location (the surplus location).
    pub pickup_location: String,
    /// Delivery location (supplied by the NGO at claim time).
    pub delivery_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn task_with(
        actual: Option<DateTime<Utc>>,
        scheduled: Option<DateTime<Utc>>,
    ) -> Task {
        Task {
            id: Uuid::new_v4(),
            surplus_id: Uuid::new_v4(),
            donor_id: Uuid::new_v4(),
            ngo_id: Uuid::new_v4(),
            logistics_partner_id: None,
            status: TaskStatus::Delivered,
            pickup_location: "a".into(),
            delivery_location: "b".into(),
            scheduled_delivery: scheduled,
            actual_pickup: None,
            actual_delivery: actual,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_on_time_requires_both_timestamps() {
        let now = Utc::now();
        assert!(task_with(Some(now), Some(now + TimeDelta::hours(1))).was_on_time());
        assert!(!task_with(Some(now + TimeDelta::hours(2)), Some(now)).was_on_time());
        assert!(!task_with(Some(now), None).was_on_time());
        assert!(!task_with(None, Some(now)).was_on_time());
    }
}
