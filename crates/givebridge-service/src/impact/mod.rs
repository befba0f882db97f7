//! Impact and performance aggregation services.

pub mod badges;
pub mod service;

pub use service::ImpactService;
