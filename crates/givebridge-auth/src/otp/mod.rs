//! One-time-password challenges for identity verification.

pub mod store;

pub use store::OtpStore;
