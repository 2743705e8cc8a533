//! Forum Backend
//!
//! REST backend for the discussion-forum module: forum access control,
//! per-user read tracking and topic watch subscriptions over SQLite.

mod access;
mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Forum Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Forums
        .route("/forums", get(api::list_forums))
        .route("/forums", post(api::create_forum))
        .route("/forums/{id}", get(api::get_forum))
        .route("/forums/{id}", put(api::update_forum))
        .route("/forums/{id}", delete(api::delete_forum))
        .route("/forums/{id}/topics", get(api::list_forum_topics))
        .route("/forums/{id}/topics", post(api::create_forum_topic))
        .route("/forums/{id}/unread", get(api::unread_topics))
        .route("/forums/{id}/watch", post(api::watch_forum))
        .route("/forums/{id}/watch", delete(api::unwatch_forum))
        // Topics
        .route("/topics/{id}", get(api::get_topic))
        .route("/topics/{id}", delete(api::delete_topic))
        .route("/topics/{id}/comments", get(api::list_comments))
        .route("/topics/{id}/comments", post(api::create_comment))
        .route("/topics/{id}/read", post(api::mark_topic_read))
        .route("/topics/{id}/watch", post(api::watch_topic))
        .route("/topics/{id}/watch", delete(api::unwatch_topic))
        .route("/topics/{id}/watchers", get(api::get_watchers));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
