//! # givebridge-service
//!
//! Business logic services for GiveBridge. Each service orchestrates
//! repositories and auth primitives behind a role-aware API; the donation
//! workflow service owns every compound status transition.

pub mod admin;
pub mod context;
pub mod identity;
pub mod impact;
pub mod notification;
pub mod request;
pub mod surplus;
pub mod user;
pub mod workflow;

pub use context::RequestContext;
