//! Impact and badge threshold configuration.

use serde::{Deserialize, Serialize};

/// Thresholds for impact metrics and donor badges.
///
/// Badge cutoffs count *delivered* donations. Kept in configuration rather
/// than inlined so deployments can tune award levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactConfig {
    /// Delivered donations required for the bronze badge.
    #[serde(default = "default_bronze")]
    pub bronze_badge_threshold: i64,
    /// Delivered donations required for the silver badge.
    #[serde(default = "default_silver")]
    pub silver_badge_threshold: i64,
    /// Delivered donations required for the gold badge.
    #[serde(default = "default_gold")]
    pub gold_badge_threshold: i64,
    /// Estimated people served per delivered quantity unit.
    #[serde(default = "default_people_multiplier")]
    pub people_served_multiplier: i64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            bronze_badge_threshold: default_bronze(),
            silver_badge_threshold: default_silver(),
            gold_badge_threshold: default_gold(),
            people_served_multiplier: default_people_multiplier(),
        }
    }
}

fn default_bronze() -> i64 {
    10
}

fn default_silver() -> i64 {
    50
}

fn default_gold() -> i64 {
    100
}

fn default_people_multiplier() -> i64 {
    3
}
