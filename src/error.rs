//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework. It is the only place
//! where internal failures are turned into caller-visible messages.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    constants::{MSG_INELIGIBLE_DOMAIN, MSG_SERVER_ERROR},
    db::StoreError,
    domain::ResolveError,
};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{msg}", msg = MSG_INELIGIBLE_DOMAIN)]
    Rejected,

    #[error("Request body is too large")]
    PayloadTooLarge,

    // Storage errors
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub code: &'static str,
    pub detail: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Rejected => "INELIGIBLE_DOMAIN",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::Validation(_) | Self::Rejected => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::StorageUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::StorageUnavailable(_) | Self::Internal(_) => MSG_SERVER_ERROR.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server-side errors but don't expose details to clients
        match &self {
            AppError::StorageUnavailable(e) => {
                tracing::error!(error = %e, "Storage error");
                tracing::debug!("Storage error details: {:?}", e);
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
            }
            _ => {}
        }

        let body = ErrorResponse {
            ok: false,
            code: self.error_code(),
            detail: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::MalformedInput(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Field name and rule only; the rejected value never reaches the caller
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let reason = match e.code.as_ref() {
                        "email" => "invalid email address",
                        "length" => "too long",
                        _ => "invalid",
                    };
                    format!("{field}: {reason}")
                })
            })
            .collect();
        messages.sort();
        messages.dedup();

        AppError::Validation(messages.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");

        match rejection {
            JsonRejection::JsonDataError(_) => {
                AppError::Validation("Request body has missing or invalid fields".to_string())
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation("Expected `Content-Type: application/json`".to_string())
            }
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
            _ => AppError::Validation("Request body could not be read".to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::Validation("Invalid query string".to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
