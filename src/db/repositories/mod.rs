//! Database repositories
//!
//! Repositories translate domain models to and from store documents.

pub mod waitlist_repo;

pub use waitlist_repo::WaitlistRepository;
