//! Identity-number masking and hashing helpers.
//!
//! The plaintext number is never stored: the profile keeps a masked form
//! for display and a SHA-256 digest for uniqueness checks.

use sha2::{Digest, Sha256};

/// Mask an identity number for display, keeping only the last four digits.
pub fn mask_identity_number(number: &str) -> String {
    let visible: String = number.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("XXXX-XXXX-{visible}")
}

/// Hash an identity number with SHA-256, returning a lowercase hex digest.
pub fn hash_identity_number(number: &str) -> String {
    let digest = Sha256::digest(number.as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask_identity_number("123456789012"), "XXXX-XXXX-9012");
    }

    #[test]
    fn test_hash_is_stable_hex() {
        let a = hash_identity_number("123456789012");
        let b = hash_identity_number("123456789012");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, hash_identity_number("999999999999"));
    }
}
