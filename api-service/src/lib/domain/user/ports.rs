use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Credential store boundary.
///
/// The domain never issues raw storage queries itself; registration and
/// login go through this trait. Implementations must keep the uniqueness
/// checks honest under concurrency: `insert` has to reject a duplicate
/// username or email atomically even when two registrations race past the
/// `exists_*` pre-checks.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new credential record.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Whether a user with this username exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Whether a user with this email exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
