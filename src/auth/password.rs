/**
 * Password Hashing
 *
 * bcrypt wrappers used by registration and login. A digest embeds its own
 * salt and cost parameter, so verification needs nothing beyond the stored
 * string. Failures here are internal faults, not user errors.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored digest.
///
/// bcrypt re-derives the digest with the stored salt and cost and compares
/// the results whole, so mismatch position is not observable to the caller.
pub fn verify_password(digest: &str, plaintext: &str) -> Result<bool, BcryptError> {
    verify(plaintext, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the test suite fast; the salt behavior under test is
    // identical at every cost.
    const TEST_COST: u32 = 4;

    #[test]
    fn digests_are_salted() {
        let a = hash("hunter2", TEST_COST).unwrap();
        let b = hash("hunter2", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_accepts_matching_password() {
        let digest = hash("hunter2", TEST_COST).unwrap();
        assert!(verify_password(&digest, "hunter2").unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let digest = hash("hunter2", TEST_COST).unwrap();
        assert!(!verify_password(&digest, "hunter3").unwrap());
        assert!(!verify_password(&digest, "").unwrap());
    }

    #[test]
    fn verify_fails_on_garbage_digest() {
        assert!(verify_password("not-a-bcrypt-digest", "hunter2").is_err());
    }
}
