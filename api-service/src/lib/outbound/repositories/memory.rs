use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// In-process credential store.
///
/// A single lock guards the whole record set, so the duplicate check and
/// the insert happen atomically: two racing registrations for the same
/// username can never both succeed. Intended for tests and local runs
/// without a database file.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned() -> UserError {
    UserError::DatabaseError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.iter().any(|u| &u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.iter().any(|u| u.email.as_str() == email))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        let mut all: Vec<User> = users.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
