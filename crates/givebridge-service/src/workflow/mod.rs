//! The donation workflow — guard rules and transition service.

pub mod rules;
pub mod service;

pub use service::WorkflowService;
