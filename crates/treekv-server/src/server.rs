use std::sync::Arc;

use tokio::net::TcpListener;
use treekv_tree::PathTree;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// treekv HTTP server.
pub struct TreeServer {
    config: ServerConfig,
    tree: Arc<PathTree>,
}

impl TreeServer {
    /// Server over a fresh, empty tree.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_tree(config, Arc::new(PathTree::new()))
    }

    pub fn with_tree(config: ServerConfig, tree: Arc<PathTree>) -> Self {
        Self { config, tree }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn tree(&self) -> &Arc<PathTree> {
        &self.tree
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.tree), self.config.max_body_size)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "treekv server listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("treekv server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for ctrl-c; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn server_construction() {
        let server = TreeServer::new(ServerConfig::default());
        assert_eq!(
            server.config().bind_addr,
            "0.0.0.0:1818".parse::<SocketAddr>().unwrap()
        );
        assert!(server.tree().root().is_empty());
    }

    #[test]
    fn router_shares_injected_tree() {
        let tree = Arc::new(PathTree::new());
        let server = TreeServer::with_tree(ServerConfig::default(), Arc::clone(&tree));
        let _router = server.router();
        assert!(Arc::ptr_eq(server.tree(), &tree));
    }
}
