//! Donor badge awards.

use serde::{Deserialize, Serialize};

use givebridge_core::config::impact::ImpactConfig;

/// A badge awarded for delivered donations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge name.
    pub name: String,
    /// Display icon.
    pub icon: String,
}

/// Compute the badges a donor has earned for the given number of
/// delivered donations. Thresholds come from configuration.
pub fn badges_for(delivered_donations: i64, config: &ImpactConfig) -> Vec<Badge> {
    let mut badges = Vec::new();
    if delivered_donations >= config.bronze_badge_threshold {
        badges.push(Badge {
            name: "Bronze Donor".to_string(),
            icon: "🥉".to_string(),
        });
    }
    if delivered_donations >= config.silver_badge_threshold {
        badges.push(Badge {
            name: "Silver Donor".to_string(),
            icon: "🥈".to_string(),
        });
    }
    if delivered_donations >= config.gold_badge_threshold {
        badges.push(Badge {
            name: "Gold Donor".to_string(),
            icon: "🥇".to_string(),
        });
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_cumulative() {
        let config = ImpactConfig::default();

        assert!(badges_for(0, &config).is_empty());
        assert!(badges_for(9, &config).is_empty());

        let bronze = badges_for(10, &config);
        assert_eq!(bronze.len(), 1);
        assert_eq!(bronze[0].name, "Bronze Donor");

        let silver = badges_for(50, &config);
        assert_eq!(silver.len(), 2);

        let gold = badges_for(150, &config);
        assert_eq!(gold.len(), 3);
        assert_eq!(gold[2].name, "Gold Donor");
    }

    #[test]
    fn test_configured_thresholds_respected() {
        let config = ImpactConfig {
            bronze_badge_threshold: 1,
            silver_badge_threshold: 2,
            gold_badge_threshold: 3,
            people_served_multiplier: 3,
        };
        assert_eq!(badges_for(2, &config).len(), 2);
    }
}
