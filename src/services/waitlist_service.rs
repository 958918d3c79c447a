//! Waitlist service

use crate::{
    constants::{INTERNAL_ID_FIELD, MAX_SOURCE_LENGTH},
    db::{Document, DocumentStore, StoreError, repositories::WaitlistRepository},
    domain::{DomainResolver, email_domain},
    error::{AppError, AppResult},
    models::WaitlistEntry,
    utils::{sanitize_optional, validate_email_shape},
};

/// Outcome of a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedEntry {
    pub id: String,
    pub school: String,
}

/// Waitlist service for business logic
pub struct WaitlistService;

impl WaitlistService {
    /// Add an email to the waitlist if its domain belongs to an allowed school.
    ///
    /// Identical signups are stored again; there is no deduplication.
    pub async fn join(
        store: Option<&dyn DocumentStore>,
        resolver: &DomainResolver,
        email: &str,
        source: Option<&str>,
    ) -> AppResult<JoinedEntry> {
        let email = email.trim();
        validate_email_shape(email).map_err(|e| AppError::MalformedInput(e.to_string()))?;

        let source = sanitize_optional(source);
        if source
            .as_ref()
            .is_some_and(|s| s.chars().count() > MAX_SOURCE_LENGTH)
        {
            return Err(AppError::Validation("source: too long".to_string()));
        }

        let Some(resolution) = resolver.resolve(email)? else {
            tracing::info!(
                domain = %email_domain(email).unwrap_or_default(),
                "Rejected waitlist signup from ineligible domain"
            );
            return Err(AppError::Rejected);
        };

        let store = store.ok_or(StoreError::NotConfigured)?;
        let entry = WaitlistEntry::pending(email, resolution.school, source);
        let id = WaitlistRepository::create(store, &entry).await?;

        tracing::info!(
            id = %id,
            school = %resolution.school,
            matched_domain = %resolution.matched_domain,
            strategy = %resolution.strategy,
            "Waitlist entry created"
        );

        Ok(JoinedEntry {
            id,
            school: entry.school,
        })
    }

    /// Most recent entries with store-internal identifiers removed
    pub async fn recent(store: Option<&dyn DocumentStore>, limit: u32) -> AppResult<Vec<Document>> {
        let store = store.ok_or(StoreError::NotConfigured)?;
        let mut items = WaitlistRepository::list_recent(store, limit).await?;

        items.truncate(limit as usize);
        for item in &mut items {
            item.remove(INTERNAL_ID_FIELD);
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::WAITLIST_COLLECTION,
        db::{MemoryDocumentStore, MockDocumentStore},
        domain::DomainTable,
    };
    use serde_json::json;

    fn resolver() -> DomainResolver {
        DomainResolver::new(DomainTable::ivy_league().unwrap())
    }

    #[tokio::test]
    async fn test_join_subdomain_persists_pending_entry() {
        let store = MemoryDocumentStore::new();
        let joined = WaitlistService::join(
            Some(&store),
            &resolver(),
            "student@cs.princeton.edu",
            Some("homepage"),
        )
        .await
        .unwrap();

        assert_eq!(joined.school, "Princeton University");

        let docs = store.query(WAITLIST_COLLECTION, Document::new(), 10).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"], joined.id.as_str());
        assert_eq!(docs[0]["email"], "student@cs.princeton.edu");
        assert_eq!(docs[0]["status"], "pending");
        assert_eq!(docs[0]["source"], "homepage");
    }

    #[tokio::test]
    async fn test_join_rejects_ineligible_domain() {
        let store = MemoryDocumentStore::new();
        for email in ["a@mit.edu", "foo@evilharvard.edu"] {
            let err = WaitlistService::join(Some(&store), &resolver(), email, None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Rejected));
        }
        assert_eq!(store.count(WAITLIST_COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_join_rejects_malformed_email() {
        let store = MemoryDocumentStore::new();
        for email in ["nobody", "a@b@yale.edu"] {
            let err = WaitlistService::join(Some(&store), &resolver(), email, None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::MalformedInput(_)));
        }
    }

    #[tokio::test]
    async fn test_join_checks_source_length_after_sanitizing() {
        let store = MemoryDocumentStore::new();
        let padded = format!("{}{}\u{7}", " ".repeat(10), "a".repeat(MAX_SOURCE_LENGTH));
        WaitlistService::join(Some(&store), &resolver(), "a@yale.edu", Some(&padded))
            .await
            .unwrap();

        let docs = store.query(WAITLIST_COLLECTION, Document::new(), 10).await.unwrap();
        assert_eq!(docs[0]["source"], "a".repeat(MAX_SOURCE_LENGTH));

        let too_long = "a".repeat(MAX_SOURCE_LENGTH + 1);
        let err = WaitlistService::join(Some(&store), &resolver(), "a@yale.edu", Some(&too_long))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.count(WAITLIST_COLLECTION).await, 1);
    }

    #[tokio::test]
    async fn test_join_does_not_deduplicate() {
        let store = MemoryDocumentStore::new();
        let first = WaitlistService::join(Some(&store), &resolver(), "a@yale.edu", None)
            .await
            .unwrap();
        let second = WaitlistService::join(Some(&store), &resolver(), "a@yale.edu", None)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count(WAITLIST_COLLECTION).await, 2);
    }

    #[tokio::test]
    async fn test_join_without_store_is_storage_error() {
        let err = WaitlistService::join(None, &resolver(), "a@yale.edu", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(StoreError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_join_store_failure_is_storage_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_create()
            .withf(|collection, document| {
                collection.to_string() == WAITLIST_COLLECTION
                    && document.get("status") == Some(&json!("pending"))
                    && document.get("school") == Some(&json!("Dartmouth College"))
            })
            .times(1)
            .returning(|_, _| Err(StoreError::Backend("connection reset".into())));

        let err = WaitlistService::join(Some(&store), &resolver(), "x@dartmouth.edu", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_rejected_join_never_touches_store() {
        let mut store = MockDocumentStore::new();
        store.expect_create().never();

        let err = WaitlistService::join(Some(&store), &resolver(), "a@mit.edu", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Rejected));
    }

    #[tokio::test]
    async fn test_recent_strips_internal_id_and_respects_limit() {
        let store = MemoryDocumentStore::new();
        for n in 0..8 {
            let email = format!("user{n}@columbia.edu");
            WaitlistService::join(Some(&store), &resolver(), &email, None)
                .await
                .unwrap();
        }

        let items = WaitlistService::recent(Some(&store), 5).await.unwrap();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| !item.contains_key(INTERNAL_ID_FIELD)));
        assert_eq!(items[0]["email"], "user7@columbia.edu");
    }

    #[tokio::test]
    async fn test_recent_truncates_oversized_store_result() {
        let mut store = MockDocumentStore::new();
        store.expect_query().returning(|_, _, _| {
            Ok((0..10)
                .map(|n| {
                    json!({"_id": n.to_string(), "email": "a@yale.edu"})
                        .as_object()
                        .cloned()
                        .unwrap_or_default()
                })
                .collect())
        });

        let items = WaitlistService::recent(Some(&store), 3).await.unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| !item.contains_key("_id")));
    }

    #[tokio::test]
    async fn test_recent_store_failure_is_storage_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_query()
            .returning(|_, _, _| Err(StoreError::Backend("timeout".into())));

        let err = WaitlistService::recent(Some(&store), 10).await.unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }
}
