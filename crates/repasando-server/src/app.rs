//! Application builder.
//!
//! Wires pool, repository, service and router by hand:
//!
//! ```text
//! DatabasePool -> SqlUserRepository -> UserServiceImpl -> AppState -> Router
//! ```

use axum::Router;
use repasando_config::AppConfig;
use repasando_core::{RepasandoError, RepasandoResult};
use repasando_repository::{create_pool, DatabasePool, SqlUserRepository};
use repasando_rest::{create_router, AppState};
use repasando_service::UserServiceImpl;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connects to the store, bootstraps the schema and assembles the router.
    pub async fn build(self) -> RepasandoResult<Application> {
        let config = self.config.unwrap_or_default();

        let pool = create_pool(&config.database).await?;
        pool.ensure_schema().await?;

        let repository = Arc::new(SqlUserRepository::new(Arc::clone(&pool)));
        let user_service = Arc::new(UserServiceImpl::new(repository));
        let state = AppState::new(user_service, Arc::clone(&pool), config.pagination);
        let router = create_router(state, &config.server);

        Ok(Application {
            config,
            pool,
            router,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired server, ready to accept connections.
pub struct Application {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl Application {
    /// Returns the configuration the application was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a handle to the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serves HTTP until a shutdown signal arrives, then drains the pool.
    pub async fn run(self) -> RepasandoResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RepasandoError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| RepasandoError::internal(format!("REST server error: {}", e)))?;

        self.pool.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("addr", &self.config.server.addr())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
