/// User model and database operations
///
/// Passwords are stored as Argon2id PHC strings in `pw_hash`, never as
/// plaintext. Username lookups are case-sensitive exact matches.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A user account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-increment id
    pub user_id: i64,

    /// Unique username
    pub username: String,

    /// Email address (may be empty)
    pub email: String,

    /// Argon2id password hash
    pub pw_hash: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Username (must be unique)
    pub username: String,

    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub pw_hash: String,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the username is already taken (unique
    /// constraint) or the insert fails.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, pw_hash)
            VALUES (?, ?, ?)
            RETURNING user_id, username, email, pw_hash
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.pw_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by exact username
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, pw_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, pw_hash
            FROM users
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
