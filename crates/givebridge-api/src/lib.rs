//! # givebridge-api
//!
//! HTTP API layer for GiveBridge built on Axum.
//!
//! Provides all REST endpoints, middleware (auth extraction, role
//! guards, rate limiting, CORS, logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
