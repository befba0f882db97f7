//! Surplus listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::ItemCategory;
use super::status::SurplusStatus;

/// A donor-listed surplus item and its current disposition.
///
/// `claimed_by` and `logistics_partner_id` are set-once-per-cycle: a donor
/// rejection clears `claimed_by` and returns the listing to `available`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Surplus {
    /// Unique listing identifier.
    pub id: Uuid,
    /// The donor who listed the item.
    pub donor_id: Uuid,
    /// Short listing title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Item category.
    pub category: ItemCategory,
    /// Quantity on offer.
    pub quantity: i32,
    /// Unit for the quantity (e.g. "kg", "boxes").
    pub unit: String,
    /// Current workflow status.
    pub status: SurplusStatus,
    /// Pickup location.
    pub location: String,
    /// When the item stops being usable (if applicable).
    pub expiry_date: Option<DateTime<Utc>>,
    /// The NGO currently holding the claim.
    pub claimed_by: Option<Uuid>,
    /// The logistics partner assigned to the delivery.
    pub logistics_partner_id: Option<Uuid>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new surplus listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSurplus {
    /// The listing donor.
    pub donor_id: Uuid,
    /// Listing title.
    pub title: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Item category.
    pub category: ItemCategory,
    /// Quantity on offer.
    pub quantity: i32,
    /// Quantity unit.
    pub unit: String,
    /// Pickup location.
    pub location: String,
    /// Expiry (optional).
    pub expiry_date: Option<DateTime<Utc>>,
}
