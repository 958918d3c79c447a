//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default service name shown on the root endpoint
pub const DEFAULT_SERVICE_NAME: &str = "Paired API";

/// Maximum accepted request body size in bytes (16 KiB)
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// `DATABASE_URL` scheme selecting the in-process store
pub const MEMORY_STORE_SCHEME: &str = "memory://";

/// Field name under which stores expose their own document identifier
pub const INTERNAL_ID_FIELD: &str = "_id";

// =============================================================================
// WAITLIST
// =============================================================================

/// Collection holding waitlist entries
pub const WAITLIST_COLLECTION: &str = "waitlist";

/// Initial status of every waitlist entry
pub const STATUS_PENDING: &str = "pending";

/// Default number of entries returned by the recent endpoint
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Upper bound for the recent endpoint's `limit` parameter
pub const DEFAULT_RECENT_MAX_LIMIT: u32 = 100;

/// Maximum email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: u64 = 254;

/// Maximum length of the free-form `source` tag, in characters after sanitizing
pub const MAX_SOURCE_LENGTH: usize = 128;

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

/// Returned when the email domain is not on the allow-list
pub const MSG_INELIGIBLE_DOMAIN: &str = "Please use a valid Ivy League email to join the waitlist.";

/// Returned for any server-side failure
pub const MSG_SERVER_ERROR: &str = "Server error. Please try again later.";

// =============================================================================
// HEALTH REPORTING
// =============================================================================

/// Health status strings reported by `GET /test`
pub mod health {
    pub const BACKEND_RUNNING: &str = "✅ Running";
    pub const DATABASE_CONNECTED: &str = "✅ Connected";
    pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";

    /// Maximum characters of store error text exposed by the status endpoint
    pub const ERROR_TEXT_MAX_CHARS: usize = 80;
}
