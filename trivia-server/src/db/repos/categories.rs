//! Category repository
//!
//! Categories are reference data: the API only reads them, the CLI seeds them.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id -> type, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i64, String>;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// All categories as an id -> type map.
    pub async fn map(&self) -> Result<CategoryMap, DbError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    /// Insert a category with a fixed id, renaming it if the id exists.
    pub async fn upsert(&self, id: i64, kind: &str) -> Result<Category, DbError> {
        let mut conn = self.pool.acquire().await?;
        upsert(&mut conn, id, kind).await
    }
}

pub(crate) async fn upsert(
    conn: &mut SqliteConnection,
    id: i64,
    kind: &str,
) -> Result<Category, DbError> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (id, type) VALUES (?, ?)
        ON CONFLICT (id) DO UPDATE SET type = excluded.type
        RETURNING id, type
        "#,
    )
    .bind(id)
    .bind(kind)
    .fetch_one(conn)
    .await?;

    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::test_pool;

    #[tokio::test]
    async fn list_is_empty_on_fresh_db() {
        let (_dir, pool) = test_pool().await;
        let categories = CategoryRepo::new(&pool).list().await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let (_dir, pool) = test_pool().await;
        let repo = CategoryRepo::new(&pool);
        repo.upsert(2, "Art").await.unwrap();
        repo.upsert(1, "Science").await.unwrap();

        let categories = repo.list().await.unwrap();
        assert_eq!(
            categories,
            vec![
                Category { id: 1, kind: "Science".into() },
                Category { id: 2, kind: "Art".into() },
            ]
        );
    }

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let (_dir, pool) = test_pool().await;
        let repo = CategoryRepo::new(&pool);
        repo.upsert(1, "Science").await.unwrap();
        let renamed = repo.upsert(1, "Sciences").await.unwrap();

        assert_eq!(renamed.kind, "Sciences");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn map_keys_by_id() {
        let (_dir, pool) = test_pool().await;
        let repo = CategoryRepo::new(&pool);
        repo.upsert(1, "Science").await.unwrap();
        repo.upsert(2, "Art").await.unwrap();

        let map = repo.map().await.unwrap();
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(map.get(&2).map(String::as_str), Some("Art"));
    }
}
