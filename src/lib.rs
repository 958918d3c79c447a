//! Paired - Waitlist Signup Service
//!
//! This library provides the waitlist backend for Paired. It accepts signups
//! from Ivy League email addresses and records them in a document store.
//!
//! # Features
//!
//! - Institution detection from email domains, including subdomains
//! - Pluggable document store (PostgreSQL JSONB or in-memory)
//! - Recent signup listing with internal identifiers removed
//! - Store connectivity check
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Domain**: Allow-list and domain resolution
//! - **Repositories**: Document store access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
