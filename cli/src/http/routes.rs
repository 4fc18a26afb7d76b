use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::state::AppState;

/// `/<endpoint>/<targets>[/<options>]`. Unknown endpoints are rejected in
/// the handler. A bare `/<endpoint>` reaches the handler too and fails
/// with no targets.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{endpoint}", get(handlers::probe))
        .route("/{endpoint}/", get(handlers::probe))
        .route("/{endpoint}/{*rest}", get(handlers::probe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
