//! Activity log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable activity log entry recording a user or admin action.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLogEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// The action performed (e.g. `"user.verify"`, `"surplus.claim"`).
    pub action: String,
    /// The type of target resource (e.g. `"user"`, `"surplus"`, `"task"`).
    pub resource_type: String,
    /// The target resource ID (if applicable).
    pub resource_id: Option<Uuid>,
    /// Additional details about the action (JSON).
    pub details: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new activity log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityLogEntry {
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// The action performed.
    pub action: String,
    /// Target resource type.
    pub resource_type: String,
    /// Target resource ID.
    pub resource_id: Option<Uuid>,
    /// Additional details.
    pub details: Option<serde_json::Value>,
}
