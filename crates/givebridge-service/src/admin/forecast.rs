//! Mock demand forecast.
//!
//! Placeholder for an ML-backed prediction service: numbers are sampled,
//! not predicted. TODO: replace with the real forecasting backend once
//! one exists.

use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use givebridge_entity::surplus::ItemCategory;

/// Forecast model identifier reported to clients.
const FORECAST_MODEL: &str = "demand-prediction-v1";

/// Demand trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Demand rising.
    Increasing,
    /// Demand flat.
    Stable,
    /// Demand falling.
    Decreasing,
}

/// Predicted demand for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// The category.
    pub category: ItemCategory,
    /// Predicted demand in quantity units.
    pub predicted_demand: i64,
    /// Model confidence (0–1).
    pub confidence: f64,
    /// Trend direction.
    pub trend: Trend,
}

/// A full demand forecast across categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    /// One entry per forecast category.
    pub forecast: Vec<ForecastEntry>,
    /// When the forecast was generated.
    pub generated_at: DateTime<Utc>,
    /// Model identifier.
    pub model: String,
}

/// Generate a mock forecast for the standard donation categories.
pub fn generate_forecast() -> DemandForecast {
    let mut rng = rand::rng();

    let forecast = [
        ItemCategory::Food,
        ItemCategory::Clothing,
        ItemCategory::Medical,
        ItemCategory::Educational,
    ]
    .into_iter()
    .map(|category| {
        let trend = match rng.random_range(0..3u8) {
            0 => Trend::Increasing,
            1 => Trend::Stable,
            _ => Trend::Decreasing,
        };
        ForecastEntry {
            category,
            predicted_demand: rng.random_range(50..150),
            confidence: (rng.random_range(0.7..1.0f64) * 100.0).round() / 100.0,
            trend,
        }
    })
    .collect();

    DemandForecast {
        forecast,
        generated_at: Utc::now(),
        model: FORECAST_MODEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_shape() {
        let forecast = generate_forecast();
        assert_eq!(forecast.forecast.len(), 4);
        for entry in &forecast.forecast {
            assert!((50..150).contains(&entry.predicted_demand));
            assert!((0.7..=1.0).contains(&entry.confidence));
        }
        assert_eq!(forecast.model, FORECAST_MODEL);
    }
}
