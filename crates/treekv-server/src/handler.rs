use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{debug, info, warn};
use treekv_tree::{PathTree, TreePath};

use crate::error::{ServerError, ServerResult};
use crate::render;

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub tree: Arc<PathTree>,
}

/// Entry point for every request target: GET reads, PUT writes.
///
/// The raw request path is used as-is, without percent-decoding.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let raw = uri.path();
    let result = match method {
        Method::GET | Method::HEAD => read(&state.tree, raw).map(IntoResponse::into_response),
        Method::PUT => write(&state.tree, raw, body).map(IntoResponse::into_response),
        _ => {
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET, HEAD, PUT")],
            )
                .into_response()
        }
    };

    result.unwrap_or_else(|err| {
        if err.status().is_server_error() {
            warn!(%method, path = raw, error = %err, "request failed");
        } else {
            debug!(%method, path = raw, error = %err, "request rejected");
        }
        err.into_response()
    })
}

/// Resolve `raw` and render what is there.
pub fn read(tree: &PathTree, raw: &str) -> ServerResult<String> {
    let path = TreePath::parse(raw)?;
    match tree.get(&path) {
        Some(entry) => {
            debug!(path = %path, node = entry.is_node(), "read hit");
            Ok(render::entry(&entry))
        }
        None => Err(ServerError::NotFound {
            path: path.to_string(),
        }),
    }
}

/// Store `body` verbatim at `raw`. Values are text, so the body must be
/// UTF-8.
pub fn write(tree: &PathTree, raw: &str, body: Bytes) -> ServerResult<StatusCode> {
    let path = TreePath::parse(raw)?;
    let value = String::from_utf8(body.to_vec())
        .map_err(|e| ServerError::InvalidBody(e.to_string()))?;
    let bytes = value.len();
    tree.put(&path, value)?;
    info!(path = %path, bytes, "value stored");
    Ok(StatusCode::OK)
}
