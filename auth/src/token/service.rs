use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Minimum signing secret length accepted for HS256.
pub const MIN_SECRET_BYTES: usize = 32;

/// Issues and validates signed, time-bound bearer tokens.
///
/// Tokens are compact HS256 JWTs carrying `{sub, iat, exp}` and nothing
/// else. The service is stateless: validity is purely a function of the
/// token's own content and the server clock, so any number of requests may
/// issue or validate tokens concurrently.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenService {
    /// Create a token service from a symmetric signing secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric key material, at least 32 bytes
    /// * `validity` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `SecretTooShort` - Secret is below the HS256 minimum
    pub fn new(secret: &[u8], validity: Duration) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::SecretTooShort {
                min: MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        })
    }

    /// Issue a token bound to `subject`, expiring after the configured validity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, Utc::now(), self.validity);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry and return the embedded subject.
    ///
    /// Used by the authentication gate before the caller identity is known.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not verify or token is malformed
    /// * `Expired` - Current time is at or past the embedded expiry
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }

    /// Fully validate a token against an asserted identity.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not verify or token is malformed
    /// * `Expired` - Current time is at or past the embedded expiry
    /// * `SubjectMismatch` - Embedded subject differs from `expected_subject`
    pub fn validate(&self, token: &str, expected_subject: &str) -> Result<String, TokenError> {
        let subject = self.extract_subject(token)?;

        if subject != expected_subject {
            return Err(TokenError::SubjectMismatch);
        }

        Ok(subject)
    }

    /// Verify the signature and parse the claim set.
    ///
    /// Claims of a token that fails here are never inspected: a forged but
    /// unexpired-looking claim set must not influence any decision, so
    /// every decode failure collapses into `BadSignature`. Expiry is
    /// checked separately against the server clock.
    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::BadSignature)
    }
}
