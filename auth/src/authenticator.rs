use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token issuance.
///
/// The login flow's single entry point: verifies supplied credentials
/// against a stored hash, then issues a token bound to the verified
/// identity. Token inspection for the per-request gate is exposed through
/// [`Authenticator::extract_subject`].
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token bound to the verified identity
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Wrong password, or a stored hash that cannot be parsed. Deliberately
    /// not distinguished, so callers cannot probe for corrupt records.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator from explicitly constructed parts.
    pub fn new(password_hasher: PasswordHasher, token_service: TokenService) -> Self {
        Self {
            password_hasher,
            token_service,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token bound to `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Verified identity the token asserts
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify a token's signature and expiry and return its subject.
    ///
    /// # Errors
    /// * `TokenError` - Signature, structure, or expiry check failed
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.token_service.extract_subject(token)
    }

    /// Fully validate a token against an asserted identity.
    ///
    /// # Errors
    /// * `TokenError` - Signature, expiry, or subject check failed
    pub fn validate_token(
        &self,
        token: &str,
        expected_subject: &str,
    ) -> Result<String, TokenError> {
        self.token_service.validate(token, expected_subject)
    }
}
