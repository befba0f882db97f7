//! Account services.

pub mod service;

pub use service::UserService;
