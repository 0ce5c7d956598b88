//! Dashboard handler
//!
//! Aggregates the caller's listings, inbox, and organized events in one
//! response, mirroring what a role dashboard view needs.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{Event, Listing, Message};
use crate::services::{EventService, ListingService, MessageService};
use crate::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub listings: Vec<Listing>,
    pub inbox: Vec<Message>,
    pub organized_events: Vec<Event>,
}

/// Dashboard endpoint handler
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<DashboardResponse>, AppError> {
    let listings = ListingService::new(state.db.clone())
        .get_listings_by_owner(user.0.user_id)
        .await?;

    let inbox = MessageService::new(state.db.clone())
        .inbox(user.0.user_id, None)
        .await?;

    let organized_events = EventService::new(state.db.clone())
        .get_events_by_organizer(user.0.user_id)
        .await?;

    Ok(Json(DashboardResponse {
        listings,
        inbox,
        organized_events,
    }))
}
