//! HTTP middleware

pub mod logging;

pub use logging::{RequestOutcome, logging_middleware};
