//! Waitlist repository

use serde_json::Value;

use crate::{
    constants::WAITLIST_COLLECTION,
    db::{Document, DocumentStore, StoreError},
    models::WaitlistEntry,
};

/// Repository for waitlist document operations
pub struct WaitlistRepository;

impl WaitlistRepository {
    /// Persist a new entry, returning the store-assigned id
    pub async fn create(store: &dyn DocumentStore, entry: &WaitlistEntry) -> Result<String, StoreError> {
        let document = match serde_json::to_value(entry)? {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Backend(format!(
                    "waitlist entry serialized to non-object: {other}"
                )));
            }
        };

        store.create(WAITLIST_COLLECTION, document).await
    }

    /// Most recent entries, unfiltered, as raw documents
    pub async fn list_recent(store: &dyn DocumentStore, limit: u32) -> Result<Vec<Document>, StoreError> {
        store.query(WAITLIST_COLLECTION, Document::new(), limit).await
    }
}
