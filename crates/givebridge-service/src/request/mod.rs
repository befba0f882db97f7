//! Need request services.

pub mod service;

pub use service::RequestService;
