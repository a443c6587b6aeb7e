//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::user::{User, UserQuery, UserRepository};
use crate::domain::DomainError;

const USER_COLUMNS: &str = "id, user_id, name, email, encrypted_password, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");

        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user by {}: {}", column, e)))?;

        row.as_ref().map(row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        self.find_one("user_id", user_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (user_id, name, email, encrypted_password, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user.user_id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.encrypted_password())
        .bind(user.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::conflict(conflict_message(db.constraint(), &user))
            }
            _ => DomainError::storage(format!("Failed to create user: {}", e)),
        })?;

        Ok(user.with_id(id))
    }

    async fn list(&self, query: &UserQuery) -> Result<Vec<User>, DomainError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2"
        );

        let rows = sqlx::query(&sql)
            .bind(query.limit.map(to_sql_count).unwrap_or(i64::MAX))
            .bind(query.offset.map(to_sql_count).unwrap_or(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let read_err = |e: sqlx::Error| DomainError::storage(format!("Failed to read user row: {}", e));

    Ok(User::restore(
        row.try_get("id").map_err(read_err)?,
        row.try_get::<String, _>("user_id").map_err(read_err)?,
        row.try_get::<String, _>("name").map_err(read_err)?,
        row.try_get::<String, _>("email").map_err(read_err)?,
        row.try_get::<String, _>("encrypted_password").map_err(read_err)?,
        row.try_get("created_at").map_err(read_err)?,
    ))
}

/// Describe which unique constraint a rejected insert collided with
fn conflict_message(constraint: Option<&str>, user: &User) -> String {
    match constraint {
        Some(name) if name.contains("email") => {
            format!("Email '{}' is already registered", user.email())
        }
        _ => format!("User '{}' already exists", user.user_id()),
    }
}

fn to_sql_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("Jane", "jane-doe", "jane@example.com", "hash")
    }

    #[test]
    fn test_conflict_message_for_email_constraint() {
        let message = conflict_message(Some("users_email_key"), &test_user());
        assert_eq!(message, "Email 'jane@example.com' is already registered");
    }

    #[test]
    fn test_conflict_message_for_user_id_constraint() {
        let message = conflict_message(Some("users_user_id_key"), &test_user());
        assert_eq!(message, "User 'jane-doe' already exists");

        let message = conflict_message(None, &test_user());
        assert_eq!(message, "User 'jane-doe' already exists");
    }

    #[test]
    fn test_to_sql_count_saturates() {
        assert_eq!(to_sql_count(25), 25);
        assert_eq!(to_sql_count(usize::MAX), i64::MAX);
    }
}
