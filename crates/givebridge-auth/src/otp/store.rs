//! In-memory OTP challenge store.
//!
//! Challenges are keyed by identity number and expire after the configured
//! TTL or after too many wrong attempts. In-memory state is acceptable
//! here: a lost challenge only requires requesting a new OTP.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::RngExt;
use tokio::sync::Mutex;

use givebridge_core::config::identity::IdentityConfig;
use givebridge_core::error::AppError;

/// An outstanding OTP challenge.
#[derive(Debug, Clone)]
struct OtpChallenge {
    /// The six-digit code.
    code: String,
    /// When the challenge was issued.
    issued_at: Instant,
    /// Wrong attempts so far.
    attempts: u32,
}

/// Issues and verifies one-time passwords.
#[derive(Debug, Clone)]
pub struct OtpStore {
    /// Identity number → outstanding challenge.
    challenges: Arc<Mutex<HashMap<String, OtpChallenge>>>,
    /// Challenge time-to-live.
    ttl: Duration,
    /// Maximum wrong attempts before the challenge is invalidated.
    max_attempts: u32,
}

impl OtpStore {
    /// Creates a new store from identity configuration.
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            challenges: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::from_secs(config.otp_ttl_minutes * 60),
            max_attempts: config.otp_max_attempts,
        }
    }

    /// Issues a fresh six-digit OTP for the given key, replacing any
    /// outstanding challenge.
    pub async fn issue(&self, key: &str) -> String {
        let code = format!("{:06}", rand::rng().random_range(0..1_000_000u32));

        let mut challenges = self.challenges.lock().await;
        challenges.insert(
            key.to_string(),
            OtpChallenge {
                code: code.clone(),
                issued_at: Instant::now(),
                attempts: 0,
            },
        );

        code
    }

    /// Verifies a submitted OTP against the outstanding challenge.
    ///
    /// Consumes the challenge on success; counts wrong attempts and
    /// invalidates the challenge once the limit is reached.
    pub async fn verify(&self, key: &str, submitted: &str) -> Result<(), AppError> {
        let mut challenges = self.challenges.lock().await;

        let challenge = challenges
            .get_mut(key)
            .ok_or_else(|| AppError::validation("No OTP challenge found. Request a new OTP."))?;

        if challenge.issued_at.elapsed() > self.ttl {
            challenges.remove(key);
            return Err(AppError::validation("OTP has expired. Request a new OTP."));
        }

        if challenge.code != submitted {
            challenge.attempts += 1;
            if challenge.attempts >= self.max_attempts {
                challenges.remove(key);
                return Err(AppError::validation(
                    "Too many incorrect attempts. Request a new OTP.",
                ));
            }
            return Err(AppError::validation("Incorrect OTP"));
        }

        challenges.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> OtpStore {
        OtpStore::new(&IdentityConfig {
            otp_ttl_minutes: 10,
            otp_max_attempts: 3,
            otp_rate_limit_max: 3,
            otp_rate_limit_window_minutes: 15,
        })
    }

    #[tokio::test]
    async fn test_issue_and_verify() {
        let store = store();
        let code = store.issue("123456789012").await;
        assert_eq!(code.len(), 6);
        assert!(store.verify("123456789012", &code).await.is_ok());
        // Consumed on success.
        assert!(store.verify("123456789012", &code).await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_code_counts_attempts() {
        let store = store();
        let code = store.issue("123456789012").await;
        let wrong = if code == "000000" { "000001" } else { "000000" };

        assert!(store.verify("123456789012", wrong).await.is_err());
        assert!(store.verify("123456789012", wrong).await.is_err());
        // Third wrong attempt invalidates the challenge entirely.
        assert!(store.verify("123456789012", wrong).await.is_err());
        assert!(store.verify("123456789012", &code).await.is_err());
    }

    #[tokio::test]
    async fn test_expired_challenge_rejected() {
        let store = OtpStore {
            challenges: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::ZERO,
            max_attempts: 3,
        };
        let code = store.issue("123456789012").await;
        assert!(store.verify("123456789012", &code).await.is_err());
    }
}
