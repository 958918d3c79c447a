//! Waitlist handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::extract::{ApiJson, ApiQuery},
    services::WaitlistService,
    state::AppState,
};

use super::{
    request::{JoinWaitlistRequest, RecentEntriesQuery},
    response::{JoinWaitlistResponse, RecentEntriesResponse},
};

/// Join the waitlist with an institution email
pub async fn join_waitlist(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<JoinWaitlistRequest>,
) -> AppResult<Json<JoinWaitlistResponse>> {
    // Validate request
    payload.validate()?;

    let joined = WaitlistService::join(
        state.store(),
        state.resolver(),
        &payload.email,
        payload.source.as_deref(),
    )
    .await?;

    Ok(Json(JoinWaitlistResponse {
        ok: true,
        id: joined.id,
        school: joined.school,
    }))
}

/// List the most recent signups
pub async fn recent_entries(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RecentEntriesQuery>,
) -> AppResult<Json<RecentEntriesResponse>> {
    let limit = state.config().waitlist.effective_limit(query.limit);
    let items = WaitlistService::recent(state.store(), limit).await?;

    Ok(Json(RecentEntriesResponse { ok: true, items }))
}
