//! Business logic services

pub mod health_service;
pub mod waitlist_service;

pub use health_service::HealthService;
pub use waitlist_service::{JoinedEntry, WaitlistService};
