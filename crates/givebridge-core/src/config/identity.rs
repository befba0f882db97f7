//! Mock identity (OTP) verification configuration.

use serde::{Deserialize, Serialize};

/// Settings for the donor identity-number OTP verification flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// How long an issued OTP stays valid, in minutes.
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_minutes: u64,
    /// Maximum wrong-OTP attempts before the challenge is invalidated.
    #[serde(default = "default_otp_attempts")]
    pub otp_max_attempts: u32,
    /// Maximum OTP issue requests per user within the rate window.
    #[serde(default = "default_rate_max")]
    pub otp_rate_limit_max: u32,
    /// Rate window length in minutes.
    #[serde(default = "default_rate_window")]
    pub otp_rate_limit_window_minutes: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            otp_ttl_minutes: default_otp_ttl(),
            otp_max_attempts: default_otp_attempts(),
            otp_rate_limit_max: default_rate_max(),
            otp_rate_limit_window_minutes: default_rate_window(),
        }
    }
}

fn default_otp_ttl() -> u64 {
    10
}

fn default_otp_attempts() -> u32 {
    3
}

fn default_rate_max() -> u32 {
    3
}

fn default_rate_window() -> u64 {
    15
}
