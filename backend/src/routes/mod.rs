//! Route definitions for the Camel Care Platform

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Marketplace listings (public browse, authenticated create)
        .nest("/listings", listing_routes())
        // Public user pages
        .nest("/users", user_routes())
        // Community events (public browse, authenticated create)
        .nest("/events", event_routes())
        // Protected routes - direct messages
        .nest("/messages", message_routes())
        // Protected routes - own profile
        .nest("/profile", profile_routes())
        // Protected routes - role dashboard
        .nest("/dashboard", dashboard_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
}

/// Listing routes (browse is public, creation requires auth)
fn listing_routes() -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handlers::list_listings))
        .route("/:listing_id", get(handlers::get_listing));

    let protected = Router::new()
        .route("/", post(handlers::create_listing))
        .route_layer(middleware::from_fn(auth_middleware));

    public.merge(protected)
}

/// User page routes (public)
fn user_routes() -> Router<AppState> {
    Router::new().route("/:username", get(handlers::get_user))
}

/// Event routes (browse is public, creation requires auth)
fn event_routes() -> Router<AppState> {
    let public = Router::new().route("/", get(handlers::list_events));

    let protected = Router::new()
        .route("/", post(handlers::create_event))
        .route_layer(middleware::from_fn(auth_middleware));

    public.merge(protected)
}

/// Direct message routes (protected)
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_inbox).post(handlers::send_message))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Profile routes (protected)
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", put(handlers::update_profile))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn(auth_middleware))
}
