//! Application state for Axum handlers.

use repasando_config::PaginationConfig;
use repasando_repository::DatabasePool;
use repasando_service::UserService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Arc<DatabasePool>,
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        database: Arc<DatabasePool>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            user_service,
            database,
            pagination,
        }
    }
}
