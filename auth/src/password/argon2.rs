use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Salted one-way password hashing (Argon2id).
///
/// Each `hash` call draws a fresh random salt, so hashing the same
/// password twice yields different strings; `verify` reads the salt and
/// cost parameters back out of the PHC string. Cost parameters are fixed
/// at construction and never change for the life of the process.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher with the library's default cost parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_cost_kib` - Argon2 memory cost in KiB
    /// * `time_cost` - Argon2 iteration count
    ///
    /// # Errors
    /// * `InvalidParams` - Cost values outside the algorithm's accepted range
    pub fn with_cost(memory_cost_kib: u32, time_cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(memory_cost_kib, time_cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self { params })
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Total over all inputs: a malformed stored hash verifies as `false`
    /// rather than surfacing an error, so callers cannot distinguish a
    /// corrupt record from a wrong password.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
