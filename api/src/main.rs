//! Courseboard API Server
//!
//! A layered CRUD service for course records: HTTP transport on top, a
//! domain service owning the business rules, and a PostgreSQL repository
//! behind a port trait. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCourseRepository;
use app::CourseService;
use config::Config;
use domain::ports::CourseRepository;

/// Application state shared across all handlers
///
/// Generic over the repository so the same router runs against PostgreSQL in
/// production and the in-memory repository in tests.
pub struct AppState<R: CourseRepository> {
    pub course_service: Arc<CourseService<R>>,
    pub config: Config,
}

// Manual impl: `R` itself never needs to be Clone behind the Arc.
impl<R: CourseRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            course_service: self.course_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router<R: CourseRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/courses",
            post(handlers::create_course::<R>).get(handlers::list_courses::<R>),
        )
        .route(
            "/courses/:id",
            get(handlers::get_course::<R>)
                .patch(handlers::update_course::<R>)
                .delete(handlers::delete_course::<R>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,courseboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Courseboard API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Wire the repository into the service
    let course_repo = Arc::new(PostgresCourseRepository::new(db));
    let course_service = Arc::new(CourseService::new(course_repo));

    let state = AppState {
        course_service,
        config,
    };

    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
