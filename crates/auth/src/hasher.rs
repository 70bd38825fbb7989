use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use async_trait::async_trait;

use crate::AuthError;

/// One-way password hashing capability
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, AuthError>;
    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Argon2id hasher. Work runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> Result<String, AuthError> {
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(plain.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AuthError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
            Ok(Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_differs_from_plaintext_and_verifies() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("123456").await.unwrap();

        assert_ne!(hash, "123456");
        assert!(hasher.compare("123456", &hash).await.unwrap());
        assert!(!hasher.compare("654321", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_with_fresh_salt() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("123456").await.unwrap();
        let second = hasher.hash("123456").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let hasher = Argon2Hasher::new();
        assert!(matches!(
            hasher.compare("123456", "not-a-phc-string").await,
            Err(AuthError::Hashing(_))
        ));
    }
}
