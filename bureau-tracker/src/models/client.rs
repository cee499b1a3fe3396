/// Client model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE clients (
///     id         INTEGER PRIMARY KEY AUTOINCREMENT,
///     name       TEXT NOT NULL,
///     department TEXT NOT NULL,
///     created    TEXT NOT NULL,
///     updated    TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use bureau_tracker::models::client::{Client, CreateClient};
/// # use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let client = Client::create(
///     &pool,
///     CreateClient {
///         name: "Acme Corp".to_string(),
///         department: "Engineering".to_string(),
///     },
/// )
/// .await?;
/// println!("Created client {}", client.id);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A client row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    /// Auto-increment id
    pub id: i64,

    /// Client name
    pub name: String,

    /// Department the client belongs to
    pub department: String,

    /// When the row was created
    pub created: DateTime<Utc>,

    /// When the row was last updated
    pub updated: DateTime<Utc>,
}

/// Input for creating a new client
#[derive(Debug, Clone)]
pub struct CreateClient {
    /// Client name
    pub name: String,

    /// Department the client belongs to
    pub department: String,
}

/// A (id, name) pair for populating the project form's dropdown
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClientChoice {
    /// Client id
    pub id: i64,

    /// Client name
    pub name: String,
}

impl Client {
    /// Creates a new client, stamping `created` and `updated` with the
    /// current server time
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(pool: &SqlitePool, data: CreateClient) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, department, created, updated)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, department, created, updated
            "#,
        )
        .bind(data.name)
        .bind(data.department)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(client)
    }

    /// Lists all clients, newest first
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, department, created, updated
            FROM clients
            ORDER BY id DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Lists (id, name) pairs ordered by name, for the project form's
    /// client dropdown
    pub async fn list_choices(pool: &SqlitePool) -> Result<Vec<ClientChoice>, sqlx::Error> {
        sqlx::query_as::<_, ClientChoice>(
            r#"
            SELECT id, name
            FROM clients
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Updates a client's fields and refreshes `updated`
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        name: &str,
        department: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE clients
               SET name = ?, department = ?, updated = ?
             WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(department)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes a client by id; deleting a missing id is a no-op
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
