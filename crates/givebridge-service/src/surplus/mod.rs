//! Surplus listing services.

pub mod service;

pub use service::SurplusService;
