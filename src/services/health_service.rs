//! Health service

use crate::{
    constants::health::{DATABASE_CONNECTED, DATABASE_NOT_AVAILABLE, ERROR_TEXT_MAX_CHARS},
    db::DocumentStore,
    utils::truncate_chars,
};

/// Health service for status reporting
pub struct HealthService;

impl HealthService {
    /// Best-effort description of store connectivity.
    ///
    /// This is the one place store error text is shown to callers, cut to
    /// [`ERROR_TEXT_MAX_CHARS`] characters.
    pub async fn database_status(store: Option<&dyn DocumentStore>) -> String {
        let Some(store) = store else {
            return DATABASE_NOT_AVAILABLE.to_string();
        };

        match store.ping().await {
            Ok(()) => DATABASE_CONNECTED.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Document store ping failed");
                format!("❌ {}", truncate_chars(&e.to_string(), ERROR_TEXT_MAX_CHARS))
            }
        }
    }
}
