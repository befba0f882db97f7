//! Surplus listing domain entities.

pub mod category;
pub mod model;
pub mod status;

pub use category::ItemCategory;
pub use model::{CreateSurplus, Surplus};
pub use status::SurplusStatus;
