//! HTTP server for treekv.
//!
//! Exposes a shared [`PathTree`](treekv_tree::PathTree) over plain HTTP:
//! `GET /a/b` reads the entry at `/a/b`, `PUT /a/b` stores the request body
//! there. Node reads list the immediate children under a `Begin:` header.

pub mod config;
pub mod error;
pub mod handler;
pub mod render;
pub mod router;
pub mod server;

pub use config::{LogConfig, LogFormat, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::TreeServer;
