//! Request logging middleware

use std::{fmt, time::Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Route label for requests that matched no registered route
const UNMATCHED_ROUTE: &str = "<unmatched>";

/// How a request ended, from the caller's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Served,
    /// Client error on a known route (bad input, ineligible domain)
    Rejected,
    /// Server error; the caller saw only the generic message
    Failed,
}

impl RequestOutcome {
    pub fn classify(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Served
        }
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Served => "served",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        })
    }
}

/// Logs one event per request, keyed by the route template rather than the
/// raw URI so that emails or query values never land in the logs.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let outcome = RequestOutcome::classify(status);
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        RequestOutcome::Failed => tracing::error!(
            %method, %route, status = status.as_u16(), %outcome, latency_ms,
            "Request failed"
        ),
        RequestOutcome::Rejected if route != UNMATCHED_ROUTE => tracing::warn!(
            %method, %route, status = status.as_u16(), %outcome, latency_ms,
            "Request rejected"
        ),
        _ => tracing::info!(
            %method, %route, status = status.as_u16(), %outcome, latency_ms,
            "Request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_status_class() {
        assert_eq!(RequestOutcome::classify(StatusCode::OK), RequestOutcome::Served);
        assert_eq!(
            RequestOutcome::classify(StatusCode::BAD_REQUEST),
            RequestOutcome::Rejected
        );
        assert_eq!(
            RequestOutcome::classify(StatusCode::PAYLOAD_TOO_LARGE),
            RequestOutcome::Rejected
        );
        assert_eq!(
            RequestOutcome::classify(StatusCode::INTERNAL_SERVER_ERROR),
            RequestOutcome::Failed
        );
        assert_eq!(RequestOutcome::Rejected.to_string(), "rejected");
    }
}
