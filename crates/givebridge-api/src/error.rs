//! API-layer error helpers.
//!
//! The `AppError` → HTTP mapping itself lives in
//! `givebridge_core::types::response`; this module adds the glue for
//! declarative request validation.

use givebridge_core::error::AppError;

pub use givebridge_core::types::response::ApiErrorResponse;

/// Convert declarative validator failures into a 400 with the field-error
/// array in the envelope.
pub fn validation_failed(errors: validator::ValidationErrors) -> AppError {
    let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
    AppError::validation("Validation failed").with_details(details)
}
