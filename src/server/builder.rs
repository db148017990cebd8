//! ServerBuilder for fluent API to build the HTTP server

use super::entity_registry::EntityRegistry;
use super::router::build_router;
use crate::config::AppConfig;
use crate::core::controller::ResourceController;
use crate::core::id::{IdGenerator, UuidIdGenerator};
use crate::entities::{DishDescriptor, OrderDescriptor};
use crate::storage::Store;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the GrubDash HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::load()?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    store: Option<Store>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
            id_generator: Arc::new(UuidIdGenerator),
        }
    }

    /// Use this configuration (listener address and seed data)
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Serve an existing store instead of seeding a new one from config
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the default random id generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(ids);
        self
    }

    /// The store the server will use: the injected one, or one seeded
    /// from configuration
    pub fn build_store(&self) -> Result<Store> {
        match &self.store {
            Some(store) => Ok(store.clone()),
            None => Ok(Store::from_seed(&self.config.seed)?),
        }
    }

    /// Register one descriptor per entity, all sharing `store`
    fn entity_registry(&self, store: &Store) -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(ResourceController::new(
            store.dishes.clone(),
            self.id_generator.clone(),
        ))));
        registry.register(Box::new(OrderDescriptor::new(ResourceController::new(
            store.orders.clone(),
            self.id_generator.clone(),
        ))));
        registry
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let store = self.build_store()?;
        let registry = self.entity_registry(&store);
        Ok(build_router(&registry))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.host:server.port` and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
