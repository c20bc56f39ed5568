use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// SQLite-backed credential store.
///
/// All queries are parameterized; uniqueness is enforced by the schema's
/// unique constraints, so a registration race that slips past the domain
/// pre-checks still resolves to exactly one winner.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.message().contains("users.username") {
                        return UserError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.message().contains("users.email") {
                        return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM users WHERE username = ?")
            .bind(username.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User, UserError> {
    let id: String = get_column(row, "id")?;
    let username: String = get_column(row, "username")?;
    let email: String = get_column(row, "email")?;
    let password_hash: String = get_column(row, "password_hash")?;
    let created_at: DateTime<Utc> = get_column(row, "created_at")?;

    Ok(User {
        id: UserId::from_string(&id)?,
        username: Username::new(username)?,
        email: EmailAddress::new(email)?,
        password_hash,
        created_at,
    })
}

fn get_column<'r, T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>>(
    row: &'r SqliteRow,
    column: &str,
) -> Result<T, UserError> {
    row.try_get(column)
        .map_err(|e| UserError::DatabaseError(e.to_string()))
}
