use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;

pub use crate::config::Config;
pub use crate::services::AppState;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler).layer(middleware::from_fn_with_state(
                app_state.clone(),
                handlers::metrics_auth_middleware,
            )),
        )
        .nest("/api/v1/sessions", sessions_routes())
        .nest("/api/v1/labs", labs_routes())
        .nest("/api/v1/real-world", real_world_routes())
        .with_state(app_state)
        .layer(cors)
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn sessions_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::sessions::create_session))
        .route(
            "/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::end_session),
        )
        .route("/{id}/question", post(handlers::sessions::issue_question))
        .route("/{id}/answers", post(handlers::sessions::submit_answer))
}

fn labs_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/line", post(handlers::labs::sample_line))
        .route("/compare", post(handlers::labs::compare_lines))
}

fn real_world_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/street-grid", get(handlers::real_world::street_grid))
        .route("/business", get(handlers::real_world::business))
        .route("/temperature", get(handlers::real_world::temperature))
        .route("/marathon", get(handlers::real_world::marathon))
}
