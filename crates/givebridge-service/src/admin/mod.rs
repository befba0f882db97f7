//! Admin supervision services.

pub mod forecast;
pub mod service;

pub use service::AdminService;
