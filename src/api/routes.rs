use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Champion catalog
        .route("/api/champions", get(handlers::get_champions))
        // Users & auth
        .route("/api/users/register", post(handlers::register))
        .route("/api/users/login", post(handlers::login))
        .route("/api/users/:id", get(handlers::get_user))
        // Preferences
        .route("/api/users/:id/favorites", get(handlers::get_favorites))
        .route("/api/users/:id/preferences", post(handlers::save_preferences))
        // Recommendations
        .route("/api/recommendations/:id", get(handlers::get_recommendations))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
