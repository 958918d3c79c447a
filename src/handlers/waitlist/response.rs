//! Waitlist response DTOs

use serde::Serialize;

use crate::db::Document;

/// Successful signup response
#[derive(Debug, Serialize)]
pub struct JoinWaitlistResponse {
    pub ok: bool,
    pub id: String,
    pub school: String,
}

/// Recent entries response
#[derive(Debug, Serialize)]
pub struct RecentEntriesResponse {
    pub ok: bool,
    pub items: Vec<Document>,
}
