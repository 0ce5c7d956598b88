//! Direct message HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::middleware::CurrentUser;
use crate::services::message::{MessageService, SendMessageInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InboxQuery {
    pub limit: Option<i64>,
}

/// Send a message to another user
pub async fn send_message(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<SendMessageInput>,
) -> impl IntoResponse {
    let service = MessageService::new(state.db.clone());

    match service.send(user.0.user_id, input).await {
        Ok(message) => (StatusCode::CREATED, Json(message)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List the current user's inbox, newest first
pub async fn list_inbox(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<InboxQuery>,
) -> impl IntoResponse {
    let service = MessageService::new(state.db.clone());

    match service.inbox(user.0.user_id, query.limit).await {
        Ok(messages) => {
            (StatusCode::OK, Json(serde_json::json!({ "messages": messages }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
