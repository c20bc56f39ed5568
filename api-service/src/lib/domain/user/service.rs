use std::sync::Arc;

use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Domain service for registration and user lookup.
///
/// Constructed once at startup with its dependencies passed in explicitly;
/// holds no per-request state.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    password_hasher: PasswordHasher,
}

impl UserService {
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `password_hasher` - Configured hasher shared with the login flow
    pub fn new(repository: Arc<dyn UserRepository>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Register a new user with a hashed password.
    ///
    /// Username and email uniqueness are pre-checked here; the store's own
    /// unique constraints remain the backstop when two registrations race,
    /// so exactly one of them can ever succeed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHash` - Hashing the password failed
    /// * `DatabaseError` - Storage operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .exists_by_username(&command.username)
            .await?
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        if self.repository.exists_by_email(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.insert(user).await?;

        tracing::info!(username = %created_user.username, "User registered");

        Ok(created_user)
    }

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Storage operation failed
    pub async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
