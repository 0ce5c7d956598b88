//! User page and profile HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::middleware::CurrentUser;
use crate::services::profile::{ProfileService, UpdateProfileInput};
use crate::AppState;

/// Get a user's public page by username (public)
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    let service = ProfileService::new(state.db.clone());

    match service.get_user_with_profile(&username).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update the current user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<UpdateProfileInput>,
) -> impl IntoResponse {
    let service = ProfileService::new(state.db.clone());

    match service.update_profile(user.0.user_id, input).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => e.into_response(),
    }
}
