/// The `Post` document and its store operations
///
/// A post has an opaque store-assigned id, a title, free-form Markdown
/// text, and a date. The date is always the server time at the moment
/// of the save that produced the current revision; callers never supply
/// it.

use crate::store::{DocumentStore, SortDirection, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Collection name for posts
const COLLECTION: &str = "posts";

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque store-assigned id
    pub id: String,

    /// Post title
    pub title: String,

    /// Post body, rendered as Markdown at view time
    pub text: String,

    /// Server time of the save that produced this revision
    pub date: DateTime<Utc>,
}

impl Post {
    /// Creates a fresh post with a new id, stamped with the current
    /// server time
    pub fn new(title: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            text,
            date: Utc::now(),
        }
    }

    fn store(pool: &SqlitePool) -> DocumentStore {
        DocumentStore::new(pool.clone(), COLLECTION)
    }

    /// Lists all posts, newest first
    pub async fn all_newest_first(pool: &SqlitePool) -> Result<Vec<Self>, StoreError> {
        Self::store(pool)
            .find_sorted("date", SortDirection::Descending)
            .await
    }

    /// Finds a post by id
    pub async fn find(pool: &SqlitePool, id: &str) -> Result<Option<Self>, StoreError> {
        Self::store(pool).find_one(id).await
    }

    /// Saves this post, replacing any existing revision with the same id
    pub async fn save(&self, pool: &SqlitePool) -> Result<(), StoreError> {
        Self::store(pool).insert(&self.id, self).await
    }

    /// Removes a post by id; removing a missing id is a no-op
    pub async fn remove(pool: &SqlitePool, id: &str) -> Result<(), StoreError> {
        Self::store(pool).remove(id).await
    }
}
