//! Database connection pool management.

use repasando_config::DatabaseConfig;
use repasando_core::{RepasandoError, RepasandoResult};
use sqlx::{any::AnyPoolOptions, AnyPool};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const MYSQL_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    user_name VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    CONSTRAINT uk_users_email UNIQUE (email),
    CONSTRAINT uk_users_user_name UNIQUE (user_name)
)
"#;

const SQLITE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    user_name TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)
"#;

/// Store engine selected from the database URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    MySql,
    Sqlite,
}

impl DatabaseBackend {
    /// Picks the backend for a connection URL.
    pub fn from_url(url: &str) -> RepasandoResult<Self> {
        let url = url.trim();
        if url.starts_with("mysql:") {
            Ok(Self::MySql)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            Err(RepasandoError::Configuration(format!(
                "Unsupported database URL: {}",
                url.split(':').next().unwrap_or_default()
            )))
        }
    }

    /// Name used in log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Query returning the id generated by the last insert on this connection.
    pub(crate) const fn last_insert_id_query(&self) -> &'static str {
        match self {
            Self::MySql => "SELECT CAST(LAST_INSERT_ID() AS SIGNED)",
            Self::Sqlite => "SELECT last_insert_rowid()",
        }
    }

    const fn users_table_ddl(&self) -> &'static str {
        match self {
            Self::MySql => MYSQL_USERS_TABLE,
            Self::Sqlite => SQLITE_USERS_TABLE,
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: AnyPool,
    backend: DatabaseBackend,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> RepasandoResult<Self> {
        let backend = DatabaseBackend::from_url(&config.url)?;
        info!("Connecting to {} database...", backend);

        sqlx::any::install_default_drivers();

        let in_memory = is_in_memory(&config.url);

        // Every connection to `sqlite::memory:` opens its own empty database,
        // so an in-memory pool is pinned to a single long-lived connection.
        let (min_connections, max_connections) = if in_memory {
            if config.max_connections > 1 {
                warn!(
                    "In-memory database: ignoring max_connections = {}, using 1",
                    config.max_connections
                );
            }
            (1, 1)
        } else {
            (config.min_connections, config.max_connections)
        };

        let mut options = AnyPoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections)
            .acquire_timeout(config.connect_timeout());

        options = if in_memory {
            options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            options.idle_timeout(Some(config.idle_timeout()))
        };

        let pool = options.connect(&config.url).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            RepasandoError::Database(format!("Failed to connect: {}", e))
        })?;

        info!("{} connection pool established", backend);
        Ok(Self { pool, backend })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &AnyPool {
        &self.pool
    }

    /// Returns the backend this pool talks to.
    #[must_use]
    pub const fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> RepasandoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepasandoError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Creates the `users` table and its unique constraints when missing.
    pub async fn ensure_schema(&self) -> RepasandoResult<()> {
        info!("Ensuring users schema on {}", self.backend);
        sqlx::query(self.backend.users_table_ddl())
            .execute(&self.pool)
            .await
            .map_err(|e| RepasandoError::Database(format!("Schema bootstrap failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

impl std::ops::Deref for DatabasePool {
    type Target = AnyPool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend)
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> RepasandoResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}
