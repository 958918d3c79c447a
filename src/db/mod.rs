//! Database module
//!
//! This module defines the document-store abstraction the service writes to,
//! its PostgreSQL and in-memory backends, and the repositories built on top.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod repositories;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{config::DatabaseConfig, constants::MEMORY_STORE_SCHEME};

pub use connection::*;
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A schemaless JSON document
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Shared handle to a store backend
pub type SharedStore = Arc<dyn DocumentStore>;

/// Minimal document-store capability used by the service.
///
/// Documents returned by [`DocumentStore::query`] carry the store-assigned
/// identifier under [`crate::constants::INTERNAL_ID_FIELD`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its identifier
    async fn create(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Return up to `limit` documents whose fields equal every field in
    /// `filter`, newest first
    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError>;

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Document store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document store is not configured")]
    NotConfigured,

    #[error("Unsupported DATABASE_URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open the store selected by `DATABASE_URL`.
///
/// Returns `None` when no URL is configured; the service then runs without
/// persistence and reports the database as not available.
pub async fn connect_store(config: &DatabaseConfig) -> Result<Option<SharedStore>, StoreError> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, running without a document store");
        return Ok(None);
    };

    if url.starts_with(MEMORY_STORE_SCHEME) {
        tracing::info!("Using in-memory document store");
        return Ok(Some(Arc::new(MemoryDocumentStore::new())));
    }

    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        tracing::info!("Connecting to database...");
        let pool = create_pool(config).await?;

        tracing::info!("Running database migrations...");
        run_migrations(&pool).await?;

        return Ok(Some(Arc::new(PgDocumentStore::new(pool))));
    }

    let scheme = url.split("://").next().unwrap_or(url);
    Err(StoreError::UnsupportedUrl(scheme.to_string()))
}
