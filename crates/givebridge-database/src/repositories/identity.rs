//! Mock identity registry repository.
//!
//! Holds the seeded identity records the OTP verification flow checks
//! numbers against. Stands in for the real government verification API.

use sqlx::{FromRow, PgPool};

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;

/// A seeded mock identity record.
#[derive(Debug, Clone, FromRow)]
pub struct IdentityRecord {
    /// The 12-digit identity number.
    pub number: String,
    /// Name on record.
    pub holder_name: String,
    /// Phone number linked to the identity.
    pub linked_phone: String,
}

/// Repository for mock identity record lookups.
#[derive(Debug, Clone)]
pub struct IdentityRepository {
    pool: PgPool,
}

impl IdentityRepository {
    /// Create a new identity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up an identity record by its 12-digit number.
    pub async fn find_by_number(&self, number: &str) -> AppResult<Option<IdentityRecord>> {
        sqlx::query_as::<_, IdentityRecord>(
            "SELECT number, holder_name, linked_phone FROM aadhaar_records WHERE number = $1",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up identity record", e)
        })
    }
}
