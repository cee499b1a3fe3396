/// The document store
///
/// A thin schema-less persistence layer over SQLite: each row in the
/// `documents` table is one JSON document addressed by an opaque id and
/// grouped into a named collection. The store offers exactly the
/// operations the blog needs: upsert, find one by id, find all sorted by
/// a document field, and remove by id. Removing a missing id is a no-op.
///
/// Sorting uses `json_extract` on the payload, so a sort field must hold
/// values whose string ordering matches the intended order; RFC 3339
/// timestamps do.
///
/// # Example
///
/// ```no_run
/// use bureau_blog::store::DocumentStore;
/// use serde::{Deserialize, Serialize};
/// # use sqlx::SqlitePool;
///
/// #[derive(Serialize, Deserialize)]
/// struct Note {
///     body: String,
/// }
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let store = DocumentStore::new(pool, "notes");
///
/// store.insert("note-1", &Note { body: "hello".into() }).await?;
/// let found: Option<Note> = store.find_one("note-1").await?;
/// # Ok(())
/// # }
/// ```

use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;

/// Error type for document store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document failed to (de)serialize
    #[error("Invalid document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Sort direction for [`DocumentStore::find_sorted`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A handle to one collection of documents
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
    collection: &'static str,
}

impl DocumentStore {
    /// Creates a store handle for the given collection
    pub fn new(pool: SqlitePool, collection: &'static str) -> Self {
        Self { pool, collection }
    }

    /// Inserts a document, replacing any existing document with the
    /// same id
    pub async fn insert<T: Serialize>(&self, id: &str, document: &T) -> Result<(), StoreError> {
        let data = serde_json::to_string(document)?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, data)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(id)
        .bind(self.collection)
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Finds a document by id
    pub async fn find_one<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT data FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(self.collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(data,)| serde_json::from_str(&data))
            .transpose()
            .map_err(Into::into)
    }

    /// Finds all documents in the collection, sorted by a document field
    pub async fn find_sorted<T: DeserializeOwned>(
        &self,
        field: &str,
        direction: SortDirection,
    ) -> Result<Vec<T>, StoreError> {
        // The sort direction cannot be bound as a parameter
        let sql = match direction {
            SortDirection::Ascending => {
                r#"
                SELECT data FROM documents
                WHERE collection = ?
                ORDER BY json_extract(data, ?) ASC
                "#
            }
            SortDirection::Descending => {
                r#"
                SELECT data FROM documents
                WHERE collection = ?
                ORDER BY json_extract(data, ?) DESC
                "#
            }
        };

        let rows: Vec<(String,)> = sqlx::query_as(sql)
            .bind(self.collection)
            .bind(format!("$.{}", field))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(data,)| serde_json::from_str(&data).map_err(Into::into))
            .collect()
    }

    /// Removes a document by id; removing a missing id is a no-op
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(self.collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use sqlx::sqlite::SqlitePoolOptions;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        label: String,
        rank: i64,
    }

    async fn test_store() -> DocumentStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        crate::MIGRATOR.run(&pool).await.unwrap();

        DocumentStore::new(pool, "docs")
    }

    #[tokio::test]
    async fn test_insert_and_find_one() {
        let store = test_store().await;

        let doc = Doc {
            label: "first".to_string(),
            rank: 1,
        };
        store.insert("a", &doc).await.unwrap();

        let found: Option<Doc> = store.find_one("a").await.unwrap();
        assert_eq!(found, Some(doc));

        let missing: Option<Doc> = store.find_one("zzz").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_insert_replaces_existing_document() {
        let store = test_store().await;

        store
            .insert("a", &Doc { label: "old".to_string(), rank: 1 })
            .await
            .unwrap();
        store
            .insert("a", &Doc { label: "new".to_string(), rank: 2 })
            .await
            .unwrap();

        let found: Doc = store.find_one("a").await.unwrap().unwrap();
        assert_eq!(found.label, "new");

        let all: Vec<Doc> = store
            .find_sorted("rank", SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_find_sorted_both_directions() {
        let store = test_store().await;

        for (id, rank) in [("a", 2), ("b", 1), ("c", 3)] {
            store
                .insert(id, &Doc { label: id.to_string(), rank })
                .await
                .unwrap();
        }

        let ascending: Vec<Doc> = store
            .find_sorted("rank", SortDirection::Ascending)
            .await
            .unwrap();
        let ranks: Vec<i64> = ascending.iter().map(|d| d.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let descending: Vec<Doc> = store
            .find_sorted("rank", SortDirection::Descending)
            .await
            .unwrap();
        let ranks: Vec<i64> = descending.iter().map(|d| d.rank).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop() {
        let store = test_store().await;

        store
            .insert("keep", &Doc { label: "keep".to_string(), rank: 1 })
            .await
            .unwrap();

        store.remove("never-existed").await.unwrap();

        let all: Vec<Doc> = store
            .find_sorted("rank", SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = test_store().await;
        let other = DocumentStore::new(store.pool.clone(), "other");

        store
            .insert("a", &Doc { label: "mine".to_string(), rank: 1 })
            .await
            .unwrap();

        let found: Option<Doc> = other.find_one("a").await.unwrap();
        assert_eq!(found, None);
    }
}
