//! # givebridge-entity
//!
//! Domain entity models for GiveBridge. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod activity;
pub mod notification;
pub mod request;
pub mod surplus;
pub mod task;
pub mod user;
