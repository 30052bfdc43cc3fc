use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;
use treekv_tree::PathTree;

use crate::handler::{self, AppState};

/// Build the axum router serving `tree`. Every path is handled by the same
/// dispatcher; there are no reserved routes.
pub fn build_router(tree: Arc<PathTree>, max_body_size: usize) -> Router {
    Router::new()
        .fallback(handler::dispatch)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { tree })
}
