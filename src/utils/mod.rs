//! Utility functions

pub mod validation;

pub use validation::*;
