//! Role-specific profile attribute enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of donor account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "donor_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonorType {
    /// A private individual.
    Individual,
    /// A restaurant donating prepared food surplus.
    Restaurant,
    /// A grocery store.
    Grocery,
    /// A hotel.
    Hotel,
}

impl DonorType {
    /// Return the donor type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Restaurant => "restaurant",
            Self::Grocery => "grocery",
            Self::Hotel => "hotel",
        }
    }
}

impl fmt::Display for DonorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonorType {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "restaurant" => Ok(Self::Restaurant),
            "grocery" => Ok(Self::Grocery),
            "hotel" => Ok(Self::Hotel),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid donor type: '{s}'. Expected one of: individual, restaurant, grocery, hotel"
            ))),
        }
    }
}

/// Vehicle class a logistics partner operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Two-wheeler.
    Bike,
    /// Passenger car.
    Car,
    /// Delivery van.
    Van,
    /// Truck.
    Truck,
}

impl VehicleType {
    /// Return the vehicle type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Van => "van",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = givebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "van" => Ok(Self::Van),
            "truck" => Ok(Self::Truck),
            _ => Err(givebridge_core::AppError::validation(format!(
                "Invalid vehicle type: '{s}'. Expected one of: bike, car, van, truck"
            ))),
        }
    }
}
