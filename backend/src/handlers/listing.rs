//! Listing HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::middleware::CurrentUser;
use crate::services::listing::{CreateListingInput, ListingQuery, ListingService};
use crate::AppState;

/// List and search listings (public)
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let service = ListingService::new(state.db.clone());

    match service.search(query).await {
        Ok(listings) => {
            (StatusCode::OK, Json(serde_json::json!({ "listings": listings }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Get a specific listing (public)
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = ListingService::new(state.db.clone());

    match service.get_listing(listing_id).await {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new listing owned by the current user
pub async fn create_listing(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<CreateListingInput>,
) -> impl IntoResponse {
    let service = ListingService::new(state.db.clone());

    match service.create_listing(user.0.user_id, input).await {
        Ok(listing) => (StatusCode::CREATED, Json(listing)).into_response(),
        Err(e) => e.into_response(),
    }
}
