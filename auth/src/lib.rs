//! Authentication and input-hygiene primitives
//!
//! Reusable building blocks for services that authenticate callers with
//! bearer tokens:
//! - Password hashing (Argon2id)
//! - Signed, time-bound token issuance and validation (HS256 JWT)
//! - An authentication coordinator for login flows
//! - Markup sanitization and escaping for untrusted text
//!
//! Everything here is stateless with respect to request data; the only
//! shared inputs are the signing secret and hashing cost parameters fixed
//! at construction.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let token = tokens.issue("alice").unwrap();
//! assert_eq!(tokens.validate(&token, "alice").unwrap(), "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let auth = Authenticator::new(PasswordHasher::new(), tokens);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token bound to the identity
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//!
//! // Gate: recover the identity from the bearer token
//! let subject = auth.extract_subject(&result.access_token).unwrap();
//! assert_eq!(subject, "alice");
//! ```
//!
//! ## Sanitization
//! ```
//! use auth::sanitizer;
//!
//! assert_eq!(sanitizer::sanitize("<script>alert(1)</script>hello"), "hello");
//! assert_eq!(sanitizer::escape_html("a < b"), "a &lt; b");
//! ```

pub mod authenticator;
pub mod password;
pub mod sanitizer;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
