//! Credential hashing backed by Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// One-way transformation of plaintext credentials into their stored form
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync + Debug {
    /// Produce the stored form of a plaintext credential
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext credential against a stored form
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id hasher producing PHC strings with a random salt, using the
/// crate's default parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_argon2id_phc_string() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("resident-secret").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("resident-secret"));
    }

    #[test]
    fn test_verify_matches_only_original() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("resident-secret").unwrap();

        assert!(hasher.verify("resident-secret", &hash));
        assert!(!hasher.verify("resident-secret ", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("shared").unwrap();
        let second = hasher.hash("shared").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("shared", &first));
        assert!(hasher.verify("shared", &second));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("anything", "plaintext-not-a-phc"));
        assert!(!hasher.verify("anything", ""));
    }
}
