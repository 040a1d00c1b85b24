//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, routing::get, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    get_sample_app_handler, health_handler, job_failures_handler, list_sample_apps_handler,
    sample_app_form_handler, sample_app_list_handler, sample_app_update_handler,
    update_sample_app_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, request_timeout: Duration) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        // HTML views
        .route("/", get(sample_app_list_handler))
        .route("/sampleapp/list", get(sample_app_list_handler))
        .route("/sampleapp/form", get(sample_app_form_handler))
        .route("/sampleapp/form/update", post(sample_app_update_handler))
        // JSON API
        .route("/api/sampleapp", get(list_sample_apps_handler))
        .route(
            "/api/sampleapp/:id",
            get(get_sample_app_handler).post(update_sample_app_handler),
        )
        .route("/api/jobs/:job/failures", get(job_failures_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (ServiceBuilder applies top to bottom)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(Extension(app_state)),
        )
}
