//! Common test infrastructure for database integration tests.

use repasando_config::DatabaseConfig;
use repasando_core::User;
use repasando_repository::{DatabasePool, SqlUserRepository};
use std::sync::Arc;

/// Private in-memory database with the users schema in place.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database. Every call gets its own empty store.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        pool.ensure_schema()
            .await
            .expect("Failed to create users schema");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns a repository over this database.
    pub fn repository(&self) -> SqlUserRepository {
        SqlUserRepository::new(self.pool())
    }
}

/// Builds an unsaved user whose email and username derive from `tag`.
pub fn new_user(tag: &str) -> User {
    User::new(
        format!("Name {tag}"),
        format!("Last {tag}"),
        format!("{tag}@example.com"),
        format!("user_{tag}"),
        "secret123",
    )
}
