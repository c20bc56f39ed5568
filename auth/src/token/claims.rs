use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in every issued token.
///
/// Deliberately minimal: the subject identity plus the two timestamps
/// needed to bound the token's lifetime. All fields are required, so a
/// token missing any of them fails deserialization and is rejected as
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always `iat` + validity duration
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject issued at `issued_at` with the given validity.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
        }
    }

    /// Whether the claim set is expired at `current_timestamp`.
    ///
    /// Expiry is inclusive: a token is unusable from the exact second of `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
