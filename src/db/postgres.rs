//! PostgreSQL document store
//!
//! Documents live in a single `documents` table as JSONB, partitioned by a
//! `collection` column. Filters use JSONB containment (`@>`).

use async_trait::async_trait;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use super::{Document, DocumentStore, StoreError, connection::test_connection};
use crate::constants::INTERNAL_ID_FIELD;

/// Document store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(&document))
        .execute(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, Json<Document>)>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq DESC
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(Json(&filter))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(mut body))| {
                body.insert(INTERNAL_ID_FIELD.to_string(), id.to_string().into());
                body
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        test_connection(&self.pool).await?;
        Ok(())
    }
}
