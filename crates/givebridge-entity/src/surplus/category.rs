//! Item category enumeration, shared by surplus listings and need requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a donatable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Food items.
    Food,
    /// Clothing.
    Clothing,
    /// Medical supplies.
    Medical,
    /// Educational material.
    Educational,
    /// Anything else.
    Other,
}

impl ItemCategory {
    /// All categories, in display order.
    pub const ALL: [ItemCategory; 5] = [
        Self::Food,
        Self::Clothing,
        Self::Medical,
        Self::Educational,
        Self::Other,
    ];

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Clothing => "clothing",
            Self::Medical => "medical",
            Self::Educational => "educational",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "clothing" => Ok(Self::Clothing),
            "medical" => Ok(Self::Medical),
            "educational" => Ok(Self::Educational),
            "other" => Ok(Self::Other),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: food, clothing, medical, educational, other"
            ))),
        }
    }
}
