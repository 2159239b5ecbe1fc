//! The `users` table: row type, store abstraction, and the `PostgreSQL` handle.
//!
//! # Design
//! - One hard-coded parameterized statement per operation.
//! - Inputs are passed through unchecked and driver errors are returned as-is;
//!   there are no transactions, retries, or health checks at this layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use crate::error::{DataError, Result};

const SELECT_USER_QUERY: &str = "SELECT id, username, email FROM users WHERE id = $1";

const INSERT_USER_QUERY: &str = r"
    INSERT INTO users (username, email)
    VALUES ($1, $2)
    RETURNING id, username, email
";

const UPDATE_USER_QUERY: &str = "UPDATE users SET username = $2, email = $3 WHERE id = $1";

const DELETE_USER_QUERY: &str = "DELETE FROM users WHERE id = $1";

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Primary key.
    pub id: i32,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
}

/// Operations the HTTP layer needs from user storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a single user by primary key.
    async fn get_user(&self, id: i32) -> sqlx::Result<User>;
    /// Insert a user and return the stored row.
    async fn create_user(&self, username: &str, email: &str) -> sqlx::Result<User>;
    /// Overwrite the username and email of the row matching `user.id`.
    async fn update_user(&self, user: &User) -> sqlx::Result<u64>;
    /// Remove the row with the given primary key.
    async fn delete_user(&self, id: i32) -> sqlx::Result<u64>;
}

/// Owner of the database connection handle.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build a handle for the given connection string.
    ///
    /// No connection is opened until the first query runs, so an unreachable
    /// server is only reported by later calls. Must be called from within a
    /// Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidDsn`] if the connection string cannot be parsed.
    pub fn new(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .connect_lazy(dsn)
            .map_err(|source| DataError::InvalidDsn { source })?;
        info!("database handle constructed");
        Ok(Self { pool })
    }

    /// Access the underlying connection handle.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the bundled schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MigrationFailed`] if the database is unreachable or a
    /// migration fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|source| DataError::MigrationFailed { source })
    }
}

#[async_trait]
impl UserStore for Database {
    async fn get_user(&self, id: i32) -> sqlx::Result<User> {
        debug!(user_id = id, "fetching user");
        sqlx::query_as::<_, User>(SELECT_USER_QUERY)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn create_user(&self, username: &str, email: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(INSERT_USER_QUERY)
            .bind(username)
            .bind(email)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_user(&self, user: &User) -> sqlx::Result<u64> {
        sqlx::query(UPDATE_USER_QUERY)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
    }

    async fn delete_user(&self, id: i32) -> sqlx::Result<u64> {
        sqlx::query(DELETE_USER_QUERY)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_are_parameterized() {
        assert_eq!(
            SELECT_USER_QUERY,
            "SELECT id, username, email FROM users WHERE id = $1"
        );
        assert!(INSERT_USER_QUERY.contains("VALUES ($1, $2)"));
        assert!(INSERT_USER_QUERY.contains("RETURNING id, username, email"));
        assert!(UPDATE_USER_QUERY.ends_with("WHERE id = $1"));
        assert_eq!(DELETE_USER_QUERY, "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn user_serialises_with_row_keys() {
        let user = User {
            id: 7,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "username": "ada", "email": "ada@example.com" })
        );
    }

    #[tokio::test]
    async fn new_accepts_fixture_dsn_without_connecting() {
        let database = Database::new("postgres://localhost:5432/myapp?sslmode=disable")
            .expect("lazy handle should not dial the server");
        assert_eq!(database.pool().size(), 0);
    }

    #[tokio::test]
    async fn new_rejects_unparseable_dsn() {
        let Err(err) = Database::new("not a connection string") else {
            panic!("expected invalid dsn error");
        };
        assert!(matches!(err, DataError::InvalidDsn { .. }));
    }
}
