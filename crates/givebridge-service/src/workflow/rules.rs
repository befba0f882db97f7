//! Pure guard rules for the donation workflow.
//!
//! Every compound transition is checked here before the transactional
//! write, so the guards stay unit-testable without a database. The
//! transactional repository repeats the same conditions in its `WHERE`
//! clauses, which is what makes concurrent duplicates lose cleanly.

use uuid::Uuid;

use givebridge_core::error::AppError;
use givebridge_core::result::AppResult;
use givebridge_entity::surplus::{Surplus, SurplusStatus};
use givebridge_entity::task::{Task, TaskStatus};

/// An NGO may claim a listing only while it is `available`.
pub fn ensure_claimable(surplus: &Surplus) -> AppResult<()> {
    if !surplus.status.is_claimable() {
        return Err(AppError::validation("Surplus already claimed"));
    }
    Ok(())
}

/// A donor may accept or reject a claim only on their own listing and
/// only while it is `claimed`. Both failures surface as not-found so the
/// endpoint does not reveal other donors' listings.
pub fn ensure_decidable(surplus: &Surplus, donor_id: Uuid) -> AppResult<()> {
    if surplus.donor_id != donor_id || surplus.status != SurplusStatus::Claimed {
        return Err(AppError::not_found("Surplus not found"));
    }
    Ok(())
}

/// A logistics partner may take a task only if no partner holds it yet
/// and it is still `pending` or `assigned`.
pub fn ensure_assignable(task: &Task) -> AppResult<()> {
    if task.logistics_partner_id.is_some() {
        return Err(AppError::validation(
            "Task already claimed by another partner",
        ));
    }
    if !task.status.is_open_for_assignment() {
        return Err(AppError::validation("Task is not available"));
    }
    Ok(())
}

/// Whether a logistics status update from `from` to `to` is legal.
///
/// The closed table replaces the original write-through behavior:
/// anything not listed is rejected rather than silently persisted.
pub fn task_transition_allowed(from: TaskStatus, to: TaskStatus) -> bool {
    matches!(
        (from, to),
        (TaskStatus::Assigned, TaskStatus::PickedUp)
            | (TaskStatus::PickedUp, TaskStatus::InTransit)
            | (TaskStatus::PickedUp, TaskStatus::Delivered)
            | (TaskStatus::InTransit, TaskStatus::Delivered)
    )
}

/// A partner may advance only a task they hold, and only along the
/// transition table.
pub fn ensure_partner_update(task: &Task, partner_id: Uuid, target: TaskStatus) -> AppResult<()> {
    if task.logistics_partner_id != Some(partner_id) {
        return Err(AppError::not_found("Task not found"));
    }
    if !task_transition_allowed(task.status, target) {
        return Err(AppError::validation(format!(
            "Cannot move task from '{}' to '{}'",
            task.status, target
        )));
    }
    Ok(())
}

/// A donor may withdraw (expire) only a still-available listing of
/// their own.
pub fn ensure_expirable(surplus: &Surplus, donor_id: Uuid) -> AppResult<()> {
    if surplus.donor_id != donor_id {
        return Err(AppError::not_found("Surplus not found"));
    }
    if surplus.status != SurplusStatus::Available {
        return Err(AppError::validation(
            "Only available listings can be withdrawn",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use givebridge_entity::surplus::ItemCategory;

    fn surplus(status: SurplusStatus, donor_id: Uuid) -> Surplus {
        Surplus {
            id: Uuid::new_v4(),
            donor_id,
            title: "Rice".into(),
            description: None,
            category: ItemCategory::Food,
            quantity: 10,
            unit: "kg".into(),
            status,
            location: "warehouse".into(),
            expiry_date: None,
            claimed_by: None,
            logistics_partner_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn task(status: TaskStatus, partner: Option<Uuid>) -> Task {
        Task {
            id: Uuid::new_v4(),
            surplus_id: Uuid::new_v4(),
            donor_id: Uuid::new_v4(),
            ngo_id: Uuid::new_v4(),
            logistics_partner_id: partner,
            status,
            pickup_location: "a".into(),
            delivery_location: "b".into(),
            scheduled_delivery: None,
            actual_pickup: None,
            actual_delivery: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_available_is_claimable() {
        let donor = Uuid::new_v4();
        assert!(ensure_claimable(&surplus(SurplusStatus::Available, donor)).is_ok());
        for status in [
            SurplusStatus::Claimed,
            SurplusStatus::Accepted,
            SurplusStatus::InTransit,
            SurplusStatus::Delivered,
            SurplusStatus::Expired,
        ] {
            assert!(ensure_claimable(&surplus(status, donor)).is_err());
        }
    }

    #[test]
    fn test_decidable_needs_owner_and_claimed() {
        let donor = Uuid::new_v4();
        assert!(ensure_decidable(&surplus(SurplusStatus::Claimed, donor), donor).is_ok());
        // Wrong owner.
        assert!(ensure_decidable(&surplus(SurplusStatus::Claimed, donor), Uuid::new_v4()).is_err());
        // Wrong status.
        assert!(ensure_decidable(&surplus(SurplusStatus::Available, donor), donor).is_err());
        assert!(ensure_decidable(&surplus(SurplusStatus::Accepted, donor), donor).is_err());
    }

    #[test]
    fn test_assignable_rejects_taken_task() {
        assert!(ensure_assignable(&task(TaskStatus::Pending, None)).is_ok());
        assert!(ensure_assignable(&task(TaskStatus::Assigned, None)).is_ok());
        // Partner already set is rejected regardless of status.
        assert!(ensure_assignable(&task(TaskStatus::Pending, Some(Uuid::new_v4()))).is_err());
        assert!(ensure_assignable(&task(TaskStatus::PickedUp, None)).is_err());
        assert!(ensure_assignable(&task(TaskStatus::Delivered, None)).is_err());
    }

    #[test]
    fn test_transition_table() {
        assert!(task_transition_allowed(
            TaskStatus::Assigned,
            TaskStatus::PickedUp
        ));
        assert!(task_transition_allowed(
            TaskStatus::PickedUp,
            TaskStatus::InTransit
        ));
        assert!(task_transition_allowed(
            TaskStatus::PickedUp,
            TaskStatus::Delivered
        ));
        assert!(task_transition_allowed(
            TaskStatus::InTransit,
            TaskStatus::Delivered
        ));

        // Pickup straight from pending (donor never accepted) is illegal.
        assert!(!task_transition_allowed(
            TaskStatus::Pending,
            TaskStatus::PickedUp
        ));
        // No skipping to delivered from assigned.
        assert!(!task_transition_allowed(
            TaskStatus::Assigned,
            TaskStatus::Delivered
        ));
        // Terminal states go nowhere.
        assert!(!task_transition_allowed(
            TaskStatus::Delivered,
            TaskStatus::PickedUp
        ));
        assert!(!task_transition_allowed(
            TaskStatus::Cancelled,
            TaskStatus::Assigned
        ));
    }

    #[test]
    fn test_partner_update_checks_ownership_first() {
        let partner = Uuid::new_v4();
        let owned = task(TaskStatus::Assigned, Some(partner));
        assert!(ensure_partner_update(&owned, partner, TaskStatus::PickedUp).is_ok());

        // Someone else's task looks like it does not exist.
        let err = ensure_partner_update(&owned, Uuid::new_v4(), TaskStatus::PickedUp).unwrap_err();
        assert_eq!(err.kind, givebridge_core::error::ErrorKind::NotFound);

        // Held task with an illegal transition is a validation error.
        let err = ensure_partner_update(&owned, partner, TaskStatus::Delivered).unwrap_err();
        assert_eq!(err.kind, givebridge_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_expirable_only_when_available() {
        let donor = Uuid::new_v4();
        assert!(ensure_expirable(&surplus(SurplusStatus::Available, donor), donor).is_ok());
        assert!(ensure_expirable(&surplus(SurplusStatus::Claimed, donor), donor).is_err());
        assert!(ensure_expirable(&surplus(SurplusStatus::Available, donor), Uuid::new_v4()).is_err());
    }
}
