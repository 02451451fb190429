/**
 * Session Tokens
 *
 * JWT issuance and verification for stateless bearer authentication.
 *
 * Tokens carry the claims set `{sub: username, exp: unix seconds}` and are
 * signed with HS256 using a process-wide secret held by the `TokenCodec`.
 * Nothing is persisted server-side: a token is valid until its expiry, and
 * rotating the secret invalidates everything previously issued.
 *
 * Decoding collapses every failure - bad signature, malformed token,
 * missing claims, expiry - into a single `InvalidToken` error. Callers are
 * not told which check failed.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Default token lifetime when no explicit ttl is requested
const DEFAULT_TTL_MINUTES: i64 = 15;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the username the token was issued to
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token failed verification
///
/// Single failure kind on purpose: expired, tampered and malformed tokens
/// are indistinguishable to callers of [`TokenCodec::decode`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid token")]
pub struct InvalidToken;

/// Time source for expiry checks
///
/// Injectable so expiry behavior is testable without sleeping.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>);

impl Clock {
    /// Process time
    pub fn system() -> Self {
        Self(Arc::new(Utc::now))
    }

    /// A clock frozen at `at`, for tests
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self(Arc::new(move || at))
    }

    /// Current time according to this clock
    pub fn now(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Clock")
    }
}

/// Issues and verifies bearer tokens
///
/// Holds the signing keys and clock explicitly; there is no ambient
/// secret. Construct once at startup and share via application state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    clock: Clock,
}

impl TokenCodec {
    /// Create a codec from a symmetric secret
    pub fn new(secret: &str, clock: Clock) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            clock,
        }
    }

    /// Issue a token for `subject` with the default 15-minute lifetime
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(subject, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Issue a token for `subject` expiring `ttl` from now
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (self.clock.now() + ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Fails with [`InvalidToken`] if the signature does not match, the
    /// token is malformed, a claim is missing, or the clock has reached
    /// the encoded expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, InvalidToken> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock below, not the
        // library's view of system time.
        validation.validate_exp = false;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| InvalidToken)?;

        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(InvalidToken);
        }

        Ok(data.claims)
    }
}
