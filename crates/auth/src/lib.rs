//! Credential hashing and token issuance.
//!
//! Both capabilities sit behind traits so the use-case layer never depends on
//! argon2 or jsonwebtoken directly.

pub mod hasher;
pub mod tokens;

pub use hasher::{Argon2Hasher, CredentialHasher};
pub use tokens::{
    Claims, JwtTokenIssuer, TokenIssuer, TokenKind, TokenPair, MAX_TOKEN_TTL_SECONDS,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
    #[error("unexpected token kind")]
    WrongTokenKind,
    #[error("{field} must be between 1 and {max} seconds, got {seconds}", max = tokens::MAX_TOKEN_TTL_SECONDS)]
    InvalidTtl { field: &'static str, seconds: u64 },
}
