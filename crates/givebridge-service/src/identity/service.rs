//! Donor identity verification — the mock OTP flow.
//!
//! Stands in for a real government identity API: numbers are checked
//! against a seeded registry, the OTP is "sent" by logging it, and
//! completion stores only the masked number and a SHA-256 digest.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use givebridge_auth::identity::{hash_identity_number, mask_identity_number};
use givebridge_auth::otp::OtpStore;
use givebridge_core::error::AppError;
use givebridge_database::repositories::identity::IdentityRepository;
use givebridge_database::repositories::user::UserRepository;
use givebridge_entity::user::User;

use crate::context::RequestContext;

/// Response to starting a verification: where the OTP went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpIssued {
    /// Masked phone the OTP was sent to.
    pub masked_phone: String,
}

/// Current identity verification state for a donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityStatus {
    /// Masked identity number, once verified.
    pub masked_number: Option<String>,
    /// Whether verification has completed.
    pub is_verified: bool,
    /// When verification completed.
    pub verified_at: Option<DateTime<Utc>>,
}

/// Runs the donor identity OTP flow.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// Mock identity registry.
    identity_repo: Arc<IdentityRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Outstanding OTP challenges.
    otp_store: OtpStore,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(
        identity_repo: Arc<IdentityRepository>,
        user_repo: Arc<UserRepository>,
        otp_store: OtpStore,
    ) -> Self {
        Self {
            identity_repo,
            user_repo,
            otp_store,
        }
    }

    /// Starts verification: validates the number, checks the registry,
    /// and issues an OTP to the linked phone.
    pub async fn start(&self, ctx: &RequestContext, number: &str) -> Result<OtpIssued, AppError> {
        if number.len() != 12 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Invalid identity number. Must be 12 digits.",
            ));
        }

        let user = self.load_donor(ctx).await?;
        if user.is_aadhaar_verified {
            return Err(AppError::validation("Identity already verified"));
        }

        let record = self
            .identity_repo
            .find_by_number(number)
            .await?
            .ok_or_else(|| AppError::not_found("Identity number not found in our records"))?;

        let otp = self.otp_store.issue(number).await;

        // Mock SMS delivery: the OTP lands in the server log.
        info!(
            phone = %record.linked_phone,
            holder = %record.holder_name,
            "OTP issued: {otp}"
        );

        let last_four: String = record
            .linked_phone
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        Ok(OtpIssued {
            masked_phone: format!("XXXXXX{last_four}"),
        })
    }

    /// Confirms verification with the submitted OTP and records the
    /// masked number and digest on the profile.
    pub async fn confirm(
        &self,
        ctx: &RequestContext,
        number: &str,
        otp: &str,
    ) -> Result<IdentityStatus, AppError> {
        self.otp_store.verify(number, otp).await?;

        let user = self.load_donor(ctx).await?;
        if user.is_aadhaar_verified {
            return Err(AppError::validation("Identity already verified"));
        }

        let masked = mask_identity_number(number);
        let hash = hash_identity_number(number);

        let user = self
            .user_repo
            .set_identity_verified(ctx.user_id, &masked, &hash)
            .await?;

        info!(user_id = %user.id, "Identity verified");

        Ok(IdentityStatus {
            masked_number: user.aadhaar_masked,
            is_verified: user.is_aadhaar_verified,
            verified_at: user.aadhaar_verified_at,
        })
    }

    /// Current verification state for the donor.
    pub async fn status(&self, ctx: &RequestContext) -> Result<IdentityStatus, AppError> {
        let user = self.load_donor(ctx).await?;
        Ok(IdentityStatus {
            masked_number: user.aadhaar_masked,
            is_verified: user.is_aadhaar_verified,
            verified_at: user.aadhaar_verified_at,
        })
    }

    async fn load_donor(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !user.is_donor() {
            return Err(AppError::forbidden(
                "Identity verification is only available for donors",
            ));
        }
        Ok(user)
    }
}
