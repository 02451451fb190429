/**
 * Password Hashing
 *
 * One-way hashing and verification of user passwords using bcrypt.
 * The salt is generated internally and embedded in the hash string,
 * so verification needs nothing besides the stored hash.
 */

use bcrypt::DEFAULT_COST;

/// Hash a password for storage
///
/// Uses bcrypt with `DEFAULT_COST`. The returned string embeds the
/// algorithm tag, cost and salt, e.g. `$2b$12$...`.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, DEFAULT_COST)
}

/// Verify a password against a stored hash
///
/// Returns `true` iff `password` hashes to `hash` with the embedded salt.
/// A malformed hash string yields `false` rather than an error, so a
/// corrupted row can never be mistaken for a match or crash a login.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("password123").unwrap();
        assert!(verify_password("password123", &hash));
    }

    #[test]
    fn test_wrong_password() {
        let hash = hash_password("password123").unwrap();
        assert!(!verify_password("wrongpassword", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_false() {
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
        assert!(!verify_password("password123", ""));
    }
}
