/// Project model and database operations
///
/// A project optionally references a client. The reference is nullable
/// and carries no FOREIGN KEY constraint; integrity is maintained by
/// construction order in the creation flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A project row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Auto-increment id
    pub id: i64,

    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Referenced client id, if any
    pub client_id: Option<i64>,

    /// When the row was created
    pub created: DateTime<Utc>,

    /// When the row was last updated
    pub updated: DateTime<Utc>,
}

/// Input for creating a new project
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Client to link, or `None` for a standalone project
    pub client_id: Option<i64>,
}

/// A project joined with its client's name, for the project list page
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectWithClient {
    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Linked client's name, if the project has one
    pub client_name: Option<String>,

    /// When the row was created
    pub created: DateTime<Utc>,

    /// When the row was last updated
    pub updated: DateTime<Utc>,
}

impl Project {
    /// Creates a new project, stamping `created` and `updated` with the
    /// current server time
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(pool: &SqlitePool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, client_id, created, updated)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, client_id, created, updated
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.client_id)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Lists all projects, newest first
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, client_id, created, updated
            FROM projects
            ORDER BY id DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Lists all projects joined with their client's name, newest first
    pub async fn list_with_clients(
        pool: &SqlitePool,
    ) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        sqlx::query_as::<_, ProjectWithClient>(
            r#"
            SELECT p.title, p.description, c.name AS client_name, p.created, p.updated
            FROM projects p
            LEFT JOIN clients c ON c.id = p.client_id
            ORDER BY p.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Updates a project's fields and refreshes `updated`
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        title: &str,
        description: &str,
        client_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE projects
               SET title = ?, description = ?, client_id = ?, updated = ?
             WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(client_id)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes a project by id; deleting a missing id is a no-op
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
