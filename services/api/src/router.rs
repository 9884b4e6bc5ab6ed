use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use stealthnap_core::health::{healthz, probe_database};
use stealthnap_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, signup},
    gear::{create_gear, list_gear},
    location::{create_location, delete_location, list_locations},
    thread::{create_comment, create_thread, list_threads},
};
use crate::middleware::require_auth;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let auth = from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/", get(root))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        // Gear
        .route("/api/gear", get(list_gear))
        .route("/api/gear", post(create_gear).route_layer(auth.clone()))
        // Locations
        .route("/api/locations", get(list_locations))
        .route(
            "/api/locations",
            post(create_location).route_layer(auth.clone()),
        )
        .route(
            "/api/locations/{id}",
            delete(delete_location).route_layer(auth.clone()),
        )
        // Forum
        .route("/api/threads", get(list_threads))
        .route("/api/threads", post(create_thread).route_layer(auth.clone()))
        .route(
            "/api/threads/{id}/comments",
            post(create_comment).route_layer(auth),
        )
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "StealthNap backend running!"
}

async fn readyz(State(state): State<AppState>) -> StatusCode {
    probe_database(&state.db).await
}
