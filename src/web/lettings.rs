use crate::model::LettingId;
use crate::web::error::ResolveError;
use crate::web::views::{LettingDetail, LettingSummary, LettingsIndex};
use crate::web::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Json<LettingsIndex>, ResolveError> {
    let lettings = state.lettings.lettings().await?;
    info!(count = lettings.len(), "Lettings index accessed");
    Ok(Json(LettingsIndex {
        lettings: lettings.into_iter().map(LettingSummary::from).collect(),
    }))
}

pub async fn letting(
    State(state): State<AppState>,
    letting_id: Result<Path<String>, PathRejection>,
) -> Result<Json<LettingDetail>, ResolveError> {
    // Undecodable segments are misses like any other.
    let Ok(Path(letting_id)) = letting_id else {
        return Err(ResolveError::NotFound);
    };
    let id = parse_letting_id(&letting_id).ok_or(ResolveError::NotFound)?;
    let linked = state.lettings.letting(id).await?;
    info!(%id, title = %linked.child.title, "Letting detail accessed");
    Ok(Json(linked.into()))
}

/// Accepts plain decimal digits only; `+1`, `-1`, `1.0` and overflow are rejected.
fn parse_letting_id(raw: &str) -> Option<LettingId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().map(LettingId)
}
