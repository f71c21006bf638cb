//! HTTP front door.
//!
//! [`PharmacyServer`] is built once at startup and owns the route table, the
//! shared lookup state and the listener configuration.

pub mod handlers;

use crate::adapters::GooglePlacesClient;
use crate::config::ServerConfig;
use crate::core::lookup::PharmacyLookup;
use crate::domain::ports::PlacesProvider;
use crate::utils::error::Result;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// 每個請求共用的唯讀狀態
#[derive(Clone)]
pub struct AppState {
    pub lookup: PharmacyLookup,
}

pub struct RouteEntry {
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

/// 服務的完整路由表
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            path: "/",
            handler: get(handlers::home),
        },
        RouteEntry {
            path: "/pharmacies",
            handler: get(handlers::get_pharmacies),
        },
    ]
}

pub struct PharmacyServer {
    config: ServerConfig,
    routes: Vec<RouteEntry>,
    state: AppState,
}

impl PharmacyServer {
    /// 以 Google Places 客戶端建立服務
    pub fn build(config: ServerConfig) -> Result<Self> {
        let client = GooglePlacesClient::new(&config)?;
        Ok(Self::with_provider(config, Arc::new(client)))
    }

    pub fn with_provider(config: ServerConfig, provider: Arc<dyn PlacesProvider>) -> Self {
        Self {
            config,
            routes: route_table(),
            state: AppState {
                lookup: PharmacyLookup::new(provider),
            },
        }
    }

    pub fn routes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|route| route.path)
    }

    pub fn router(&self) -> Router {
        self.routes
            .iter()
            .fold(Router::new(), |router, route| {
                router.route(route.path, route.handler.clone())
            })
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("🚀 Pharmacy API listening on http://{}", addr);
        for path in self.routes() {
            tracing::debug!("Route registered: GET {}", path);
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_route_table() {
        let paths: Vec<_> = route_table().iter().map(|route| route.path).collect();
        assert_eq!(paths, vec!["/", "/pharmacies"]);
    }

    #[test]
    fn test_build_does_not_require_credential() {
        let config = ServerConfig::parse_from([
            "pharmacy-finder",
            "--api-key-env",
            "SERVER_TEST_KEY_NEVER_SET",
        ]);
        let server = PharmacyServer::build(config).unwrap();
        assert_eq!(server.routes().count(), 2);
    }
}
