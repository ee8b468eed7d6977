/**
 * Token Service
 *
 * This module handles bearer token generation and validation for user
 * sessions. Tokens are HS256 JWTs carrying only the subject id; holding a
 * valid token IS the authentication state, so verification never touches
 * the database.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 7 days, in seconds
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user ID (UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token service errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature invalid, token malformed or expired, or subject not a UUID
    #[error("invalid or expired token")]
    Invalid,
    /// Token could not be signed
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Issues and verifies bearer tokens
///
/// Holds the HMAC keys derived from the configured secret. The secret is
/// read once at startup (see `ServerConfig`); the service itself never
/// consults the environment.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Arguments
    /// * `subject` - User ID (UUID)
    ///
    /// # Returns
    /// JWT string expiring [`TOKEN_TTL_SECS`] from now
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp() as u64;

        let claims = Claims {
            sub: subject.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| TokenError::Signing(err.to_string()))
    }

    /// Verify a token and extract its subject
    ///
    /// # Arguments
    /// * `token` - JWT string as presented by the client
    ///
    /// # Returns
    /// The user ID the token was issued for
    ///
    /// # Errors
    /// `TokenError::Invalid` for a bad signature, malformed token, expired
    /// token, or a subject that is not a UUID. Callers cannot distinguish
    /// these cases.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}
