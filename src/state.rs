//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    db::{DocumentStore, SharedStore},
    domain::DomainResolver,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Document store, absent when no `DATABASE_URL` is configured
    store: Option<SharedStore>,

    /// Read-only domain resolver
    resolver: DomainResolver,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Option<SharedStore>, resolver: DomainResolver, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                resolver,
                config,
            }),
        }
    }

    /// Get the document store, if one is configured
    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.inner.store.as_deref()
    }

    /// Get a reference to the domain resolver
    pub fn resolver(&self) -> &DomainResolver {
        &self.inner.resolver
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
