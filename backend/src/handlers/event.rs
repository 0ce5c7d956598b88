//! Event HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::middleware::CurrentUser;
use crate::services::event::{CreateEventInput, EventService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub limit: Option<i64>,
}

/// List upcoming events (public)
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> impl IntoResponse {
    let service = EventService::new(state.db.clone());

    match service.upcoming(query.limit).await {
        Ok(events) => {
            (StatusCode::OK, Json(serde_json::json!({ "events": events }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create a new event organized by the current user
pub async fn create_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<CreateEventInput>,
) -> impl IntoResponse {
    let service = EventService::new(state.db.clone());

    match service.create_event(user.0.user_id, input).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
