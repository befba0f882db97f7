//! Need request urgency enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency level of a need request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No particular time pressure.
    Low,
    /// Should be fulfilled soon.
    Medium,
    /// Needed urgently.
    High,
    /// Immediate need.
    Critical,
}

impl Urgency {
    /// Return the numeric urgency (higher = more urgent).
    pub fn numeric_level(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Check if this urgency level surfaces on the urgent-needs board.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// Return the urgency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid urgency: '{s}'. Expected one of: low, medium, high, critical"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_levels() {
        assert!(Urgency::High.is_urgent());
        assert!(Urgency::Critical.is_urgent());
        assert!(!Urgency::Medium.is_urgent());
        assert!(Urgency::Critical.numeric_level() > Urgency::High.numeric_level());
    }
}
