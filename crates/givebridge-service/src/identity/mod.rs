//! Mock identity verification services.

pub mod service;

pub use service::IdentityService;
