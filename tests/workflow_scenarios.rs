//! End-to-end donation workflow scenarios, driven through the pure rule
//! engine. These mirror the handler/service sequencing without a
//! database: each step runs the same guard the service runs, then
//! applies the same field mutations the transactional repository
//! performs, recording the notification fan-out plan.

use chrono::Utc;
use uuid::Uuid;

use givebridge_core::error::ErrorKind;
use givebridge_entity::notification::NotificationKind;
use givebridge_entity::surplus::{ItemCategory, Surplus, SurplusStatus};
use givebridge_entity::task::{Task, TaskStatus};
use givebridge_service::workflow::rules;

/// A donation moving through the workflow, with the notification plan
/// each transition would fan out.
struct DonationFlow {
    donor: Uuid,
    ngo: Uuid,
    partner: Uuid,
    surplus: Surplus,
    task: Option<Task>,
    notifications: Vec<(Uuid, NotificationKind)>,
}

impl DonationFlow {
    fn new(quantity: i32) -> Self {
        let donor = Uuid::new_v4();
        let surplus = Surplus {
            id: Uuid::new_v4(),
            donor_id: donor,
            title: "Cooked meals".into(),
            description: None,
            category: ItemCategory::Food,
            quantity,
            unit: "boxes".into(),
            status: SurplusStatus::Available,
            location: "Sector 12 kitchen".into(),
            expiry_date: None,
            claimed_by: None,
            logistics_partner_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        Self {
            donor,
            ngo: Uuid::new_v4(),
            partner: Uuid::new_v4(),
            surplus,
            task: None,
            notifications: Vec::new(),
        }
    }

    fn claim(&mut self) -> Result<(), givebridge_core::AppError> {
        rules::ensure_claimable(&self.surplus)?;
        self.surplus.status = SurplusStatus::Claimed;
        self.surplus.claimed_by = Some(self.ngo);
        self.task = Some(Task {
            id: Uuid::new_v4(),
            surplus_id: self.surplus.id,
            donor_id: self.donor,
            ngo_id: self.ngo,
            logistics_partner_id: None,
            status: TaskStatus::Pending,
            pickup_location: self.surplus.location.clone(),
            delivery_location: "NGO shelter".into(),
            scheduled_delivery: None,
            actual_pickup: None,
            actual_delivery: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        self.notifications
            .push((self.donor, NotificationKind::SurplusClaimed));
        Ok(())
    }

    fn accept(&mut self, as_donor: Uuid) -> Result<(), givebridge_core::AppError> {
        rules::ensure_decidable(&self.surplus, as_donor)?;
        self.surplus.status = SurplusStatus::Accepted;
        let task = self.task.as_mut().expect("accept without task");
        task.status = TaskStatus::Assigned;
        self.notifications
            .push((self.ngo, NotificationKind::ClaimAccepted));
        Ok(())
    }

    fn reject(&mut self, as_donor: Uuid) -> Result<(), givebridge_core::AppError> {
        rules::ensure_decidable(&self.surplus, as_donor)?;
        self.surplus.status = SurplusStatus::Available;
        self.surplus.claimed_by = None;
        self.surplus.logistics_partner_id = None;
        self.task = None;
        self.notifications
            .push((self.ngo, NotificationKind::ClaimRejected));
        Ok(())
    }

    fn logistics_accept(&mut self) -> Result<(), givebridge_core::AppError> {
        let task = self.task.as_mut().expect("no task to accept");
        rules::ensure_assignable(task)?;
        task.logistics_partner_id = Some(self.partner);
        task.status = TaskStatus::Assigned;
        self.surplus.logistics_partner_id = Some(self.partner);
        self.notifications
            .push((self.donor, NotificationKind::TaskAccepted));
        self.notifications
            .push((self.ngo, NotificationKind::TaskAccepted));
        Ok(())
    }

    fn update_status(
        &mut self,
        as_partner: Uuid,
        target: TaskStatus,
    ) -> Result<(), givebridge_core::AppError> {
        let task = self.task.as_mut().expect("no task to update");
        rules::ensure_partner_update(task, as_partner, target)?;
        task.status = target;
        match target {
            TaskStatus::PickedUp => {
                task.actual_pickup = Some(Utc::now());
                self.surplus.status = SurplusStatus::InTransit;
                self.notifications
                    .push((self.donor, NotificationKind::PickupCompleted));
                self.notifications
                    .push((self.ngo, NotificationKind::PickupCompleted));
            }
            TaskStatus::Delivered => {
                task.actual_delivery = Some(Utc::now());
                self.surplus.status = SurplusStatus::Delivered;
                self.notifications
                    .push((self.donor, NotificationKind::DeliveryCompleted));
                self.notifications
                    .push((self.ngo, NotificationKind::DeliveryCompleted));
            }
            _ => {}
        }
        Ok(())
    }
}

#[test]
fn full_flow_reaches_delivered_with_workflow_notifications() {
    let mut flow = DonationFlow::new(10);

    flow.claim().unwrap();
    flow.accept(flow.donor).unwrap();
    flow.logistics_accept().unwrap();
    flow.update_status(flow.partner, TaskStatus::PickedUp).unwrap();
    flow.update_status(flow.partner, TaskStatus::Delivered).unwrap();

    assert_eq!(flow.surplus.status, SurplusStatus::Delivered);
    let task = flow.task.as_ref().unwrap();
    assert_eq!(task.status, TaskStatus::Delivered);
    assert!(task.actual_pickup.is_some());
    assert!(task.actual_delivery.is_some());

    // The four workflow milestones each fanned out, split across donor
    // and NGO recipients.
    let kinds: Vec<NotificationKind> = flow.notifications.iter().map(|(_, k)| *k).collect();
    for kind in [
        NotificationKind::SurplusClaimed,
        NotificationKind::ClaimAccepted,
        NotificationKind::PickupCompleted,
        NotificationKind::DeliveryCompleted,
    ] {
        assert!(kinds.contains(&kind), "missing {kind}");
    }

    let donor_kinds: Vec<NotificationKind> = flow
        .notifications
        .iter()
        .filter(|(to, _)| *to == flow.donor)
        .map(|(_, k)| *k)
        .collect();
    let ngo_kinds: Vec<NotificationKind> = flow
        .notifications
        .iter()
        .filter(|(to, _)| *to == flow.ngo)
        .map(|(_, k)| *k)
        .collect();

    assert!(donor_kinds.contains(&NotificationKind::SurplusClaimed));
    assert!(!ngo_kinds.contains(&NotificationKind::SurplusClaimed));
    assert!(ngo_kinds.contains(&NotificationKind::ClaimAccepted));
    assert!(!donor_kinds.contains(&NotificationKind::ClaimAccepted));
    assert!(donor_kinds.contains(&NotificationKind::DeliveryCompleted));
    assert!(ngo_kinds.contains(&NotificationKind::DeliveryCompleted));
}

#[test]
fn claiming_twice_fails_the_second_time() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    assert_eq!(flow.surplus.status, SurplusStatus::Claimed);
    assert!(flow.task.is_some());

    let err = flow.claim().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn reject_returns_listing_to_available_and_drops_task() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    flow.reject(flow.donor).unwrap();

    assert_eq!(flow.surplus.status, SurplusStatus::Available);
    assert!(flow.surplus.claimed_by.is_none());
    assert!(flow.task.is_none());

    // The listing can be claimed again after a rejection.
    flow.claim().unwrap();
    assert_eq!(flow.surplus.status, SurplusStatus::Claimed);
}

#[test]
fn accept_requires_owner_and_claimed_state() {
    let mut flow = DonationFlow::new(5);

    // Not claimed yet: the donor cannot accept.
    let err = flow.accept(flow.donor).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    flow.claim().unwrap();

    // Somebody else's accept looks like a missing listing.
    let err = flow.accept(Uuid::new_v4()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    flow.accept(flow.donor).unwrap();
    assert_eq!(flow.surplus.status, SurplusStatus::Accepted);
}

#[test]
fn logistics_accept_rejected_once_partner_is_set() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    flow.accept(flow.donor).unwrap();
    flow.logistics_accept().unwrap();

    // A second partner cannot take the task, regardless of caller.
    let err = flow.logistics_accept().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn pickup_moves_surplus_to_in_transit_not_delivered() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    flow.accept(flow.donor).unwrap();
    flow.logistics_accept().unwrap();
    flow.update_status(flow.partner, TaskStatus::PickedUp).unwrap();

    assert_eq!(flow.surplus.status, SurplusStatus::InTransit);
    assert_ne!(flow.surplus.status, SurplusStatus::Delivered);
    let task = flow.task.as_ref().unwrap();
    assert!(task.actual_pickup.is_some());
    assert!(task.actual_delivery.is_none());
}

#[test]
fn status_updates_outside_the_table_are_rejected() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    flow.accept(flow.donor).unwrap();
    flow.logistics_accept().unwrap();

    // Skipping pickup is illegal.
    let err = flow
        .update_status(flow.partner, TaskStatus::Delivered)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // A stranger's update looks like a missing task.
    let err = flow
        .update_status(Uuid::new_v4(), TaskStatus::PickedUp)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The raw strings the endpoint would receive parse against the
    // closed enum; unknown spellings never reach the transition logic.
    assert!("picked-up".parse::<TaskStatus>().is_ok());
    assert!("shipped".parse::<TaskStatus>().is_err());
    assert!("PICKED-UP".parse::<TaskStatus>().is_err());
}

#[test]
fn in_transit_is_an_optional_intermediate_step() {
    let mut flow = DonationFlow::new(5);

    flow.claim().unwrap();
    flow.accept(flow.donor).unwrap();
    flow.logistics_accept().unwrap();
    flow.update_status(flow.partner, TaskStatus::PickedUp).unwrap();
    flow.update_status(flow.partner, TaskStatus::InTransit).unwrap();
    flow.update_status(flow.partner, TaskStatus::Delivered).unwrap();

    assert_eq!(flow.task.as_ref().unwrap().status, TaskStatus::Delivered);
    assert_eq!(flow.surplus.status, SurplusStatus::Delivered);
}
