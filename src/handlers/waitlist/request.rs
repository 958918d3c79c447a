//! Waitlist request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_EMAIL_LENGTH;

/// Join waitlist request
#[derive(Debug, Deserialize, Validate)]
pub struct JoinWaitlistRequest {
    #[validate(email, length(max = MAX_EMAIL_LENGTH))]
    pub email: String,

    /// Free-form tag describing where the signup came from; its length is
    /// checked by the service once control characters and padding are gone
    pub source: Option<String>,
}

/// Recent entries query parameters
#[derive(Debug, Deserialize)]
pub struct RecentEntriesQuery {
    pub limit: Option<u32>,
}
