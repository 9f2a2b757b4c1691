//! Router configuration

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::infrastructure::di::ServiceContainer;

/// Create the form router.
pub fn create_router(container: Arc<ServiceContainer>) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
