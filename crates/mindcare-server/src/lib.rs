//! mindcare-server
//!
//! HTTP surface for the screening flow: questionnaire definition, analysis,
//! per-session report download and email delivery.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router over `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/questionnaire",
            get(routes::questionnaire::get_questionnaire),
        )
        .route("/analyze", post(routes::analyze::analyze_responses))
        .route("/sessions/{id}", get(routes::sessions::get_session))
        .route(
            "/sessions/{id}/report",
            get(routes::sessions::download_report),
        )
        .route("/sessions/{id}/email", post(routes::sessions::email_report))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
