use crate::web::error::ResolveError;
use crate::web::views::{ProfileDetail, ProfileSummary, ProfilesIndex};
use crate::web::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Json<ProfilesIndex>, ResolveError> {
    let profiles = state.profiles.profiles().await?;
    info!(count = profiles.len(), "Profiles index accessed");
    Ok(Json(ProfilesIndex {
        profiles: profiles.into_iter().map(ProfileSummary::from).collect(),
    }))
}

pub async fn profile(
    State(state): State<AppState>,
    username: Result<Path<String>, PathRejection>,
) -> Result<Json<ProfileDetail>, ResolveError> {
    let Ok(Path(username)) = username else {
        return Err(ResolveError::NotFound);
    };
    let linked = state.profiles.profile_by_username(&username).await?;
    info!(%username, "Profile detail accessed");
    Ok(Json(linked.into()))
}
