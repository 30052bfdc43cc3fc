use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use treekv_tree::{PathError, TreeError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Path \"{path}\" not found")]
    NotFound { path: String },

    #[error("malformed path: {0}")]
    MalformedPath(#[from] PathError),

    #[error("write rejected: {0}")]
    Tree(#[from] TreeError),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedPath(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Tree(TreeError::EmptyPath) => StatusCode::BAD_REQUEST,
            Self::Tree(TreeError::BlockedByValue { .. }) => StatusCode::CONFLICT,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
