//! Need request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::surplus::ItemCategory;

use super::status::RequestStatus;
use super::urgency::Urgency;

/// An NGO's declared need, independent of any specific surplus listing.
///
/// Requests are not automatically matched against surplus; they surface on
/// the urgent-needs board for donors to browse.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NeedRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The NGO that filed the request.
    pub ngo_id: Uuid,
    /// Short request title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Needed item category.
    pub category: ItemCategory,
    /// Needed quantity.
    pub quantity: i32,
    /// Unit for the quantity.
    pub unit: String,
    /// Urgency level.
    pub urgency: Urgency,
    /// Current status.
    pub status: RequestStatus,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new need request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNeedRequest {
    /// The filing NGO.
    pub ngo_id: Uuid,
    /// Request title.
    pub title: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Needed category.
    pub category: ItemCategory,
    /// Needed quantity.
    pub quantity: i32,
    /// Quantity unit.
    pub unit: String,
    /// Urgency level.
    pub urgency: Urgency,
}
