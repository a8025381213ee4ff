//! SQL user repository implementation.

use crate::{traits::UserRepository, DatabaseBackend, DatabasePool};
use async_trait::async_trait;
use repasando_core::{Page, PageRequest, RepasandoError, RepasandoResult, User, UserId};
use sqlx::{Any, FromRow, Transaction};
use std::sync::Arc;
use tracing::{debug, info};

const SELECT_USER: &str = "SELECT id, name, last_name, email, user_name, password FROM users";

/// User repository backed by the `users` table.
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqlUserRepository {
    /// Creates a new SQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }

    async fn insert(
        tx: &mut Transaction<'static, Any>,
        backend: DatabaseBackend,
        user: &User,
    ) -> RepasandoResult<UserId> {
        sqlx::query(
            r#"
            INSERT INTO users (name, last_name, email, user_name, password)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.email.as_str())
        .bind(user.user_name.as_str())
        .bind(user.password.as_str())
        .execute(&mut **tx)
        .await?;

        // The Any driver does not surface the SQLite rowid; ask the connection.
        let id: i64 = sqlx::query_scalar(backend.last_insert_id_query())
            .fetch_one(&mut **tx)
            .await?;

        Ok(UserId::new(id))
    }

    async fn update(
        tx: &mut Transaction<'static, Any>,
        id: UserId,
        user: &User,
    ) -> RepasandoResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = ?, last_name = ?, email = ?, user_name = ?, password = ?
            WHERE id = ?
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.email.as_str())
        .bind(user.user_name.as_str())
        .bind(user.password.as_str())
        .bind(id.into_inner())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn select_in(
        tx: &mut Transaction<'static, Any>,
        id: UserId,
    ) -> RepasandoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(row.map(User::from))
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    last_name: String,
    email: String,
    user_name: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.name, row.last_name, row.email, row.user_name, row.password)
            .with_id(UserId::new(row.id))
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_all(&self) -> RepasandoResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_page(&self, page: PageRequest) -> RepasandoResult<Page<User>> {
        debug!("Finding users page: {}, size: {}", page.page, page.size);

        let total = self.count().await?;

        let Some(offset) = page.offset().and_then(|offset| i64::try_from(offset).ok()) else {
            debug!("Page {} starts beyond any stored row", page.page);
            return Ok(Page::new(Vec::new(), page.page, page.size, total));
        };

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(to_i64(page.limit())?)
        .bind(offset)
        .fetch_all(self.pool.inner())
        .await?;

        let users = rows.into_iter().map(User::from).collect();
        Ok(Page::new(users, page.page, page.size, total))
    }

    async fn find_by_id(&self, id: UserId) -> RepasandoResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: &User) -> RepasandoResult<User> {
        let mut tx = self.pool.inner().begin().await?;

        let id = match user.id {
            None => {
                debug!("Inserting user: {}", user.user_name);
                Self::insert(&mut tx, self.pool.backend(), user).await?
            }
            Some(id) => {
                debug!("Updating user: {}", id);
                Self::update(&mut tx, id, user).await?;
                id
            }
        };

        // Existence is decided by the re-read; MySQL counts changed rows only.
        let stored = Self::select_in(&mut tx, id)
            .await?
            .ok_or_else(|| RepasandoError::not_found("User", id))?;

        tx.commit().await?;

        info!("Saved user {}", id);
        Ok(stored)
    }

    async fn delete_by_id(&self, id: UserId) -> RepasandoResult<()> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() > 0 {
            info!("Deleted user {}", id);
        }
        Ok(())
    }

    async fn count(&self) -> RepasandoResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        u64::try_from(count).map_err(|_| RepasandoError::internal("Negative user count"))
    }
}

fn to_i64(value: usize) -> RepasandoResult<i64> {
    i64::try_from(value).map_err(|_| RepasandoError::invalid_page("page is out of range"))
}

impl std::fmt::Debug for SqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlUserRepository")
            .field("backend", &self.pool.backend())
            .finish_non_exhaustive()
    }
}
