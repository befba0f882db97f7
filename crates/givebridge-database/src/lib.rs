//! # givebridge-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all GiveBridge entities, including the
//! transactional donation-workflow repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
