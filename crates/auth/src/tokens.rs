use chrono::{DateTime, Duration, Utc};
use gymcheck_config::AuthConfig;
use gymcheck_database::UserRole;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AuthError;

/// Upper bound for a configured token lifetime (one year)
pub const MAX_TOKEN_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies bearer tokens carrying the subject id and role
pub trait TokenIssuer: Send + Sync {
    fn issue_at(
        &self,
        subject: &str,
        role: UserRole,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError>;

    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthError>;

    fn issue(&self, subject: &str, role: UserRole, kind: TokenKind) -> Result<String, AuthError> {
        self.issue_at(subject, role, kind, Utc::now())
    }

    fn issue_pair(&self, subject: &str, role: UserRole) -> Result<TokenPair, AuthError> {
        let now = Utc::now();
        Ok(TokenPair {
            access_token: self.issue_at(subject, role, TokenKind::Access, now)?,
            refresh_token: self.issue_at(subject, role, TokenKind::Refresh, now)?,
        })
    }
}

/// HS256 JSON web tokens
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Fails when a configured lifetime is zero or longer than
    /// [`MAX_TOKEN_TTL_SECONDS`].
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        Ok(Self::new(
            &config.jwt_secret,
            ttl_from_seconds("access_token_ttl_seconds", config.access_token_ttl_seconds)?,
            ttl_from_seconds("refresh_token_ttl_seconds", config.refresh_token_ttl_seconds)?,
        ))
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }
}

impl Default for JwtTokenIssuer {
    fn default() -> Self {
        Self::new(
            &AuthConfig::default().jwt_secret,
            Duration::minutes(10),
            Duration::days(7),
        )
    }
}

fn ttl_from_seconds(field: &'static str, seconds: u64) -> Result<Duration, AuthError> {
    if seconds == 0 || seconds > MAX_TOKEN_TTL_SECONDS {
        return Err(AuthError::InvalidTtl { field, seconds });
    }
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or(AuthError::InvalidTtl { field, seconds })
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_at(
        &self,
        subject: &str,
        role: UserRole,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_owned(),
            role,
            kind,
            iat: now.timestamp(),
            exp: (now + self.ttl(kind)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(AuthError::Encoding)
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            debug!(error = %err, "token rejected");
            match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        if data.claims.kind != kind {
            return Err(AuthError::WrongTokenKind);
        }

        Ok(data.claims)
    }
}
