//! User service trait definition.

use async_trait::async_trait;
use repasando_core::{Page, PageRequest, RepasandoResult, User, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists every user.
    async fn find_all(&self) -> RepasandoResult<Vec<User>>;

    /// Lists one page of users.
    async fn find_page(&self, page: PageRequest) -> RepasandoResult<Page<User>>;

    /// Gets a user by ID.
    async fn find_by_id(&self, id: UserId) -> RepasandoResult<Option<User>>;

    /// Creates or updates a user.
    ///
    /// A clash on email or username surfaces as
    /// [`RepasandoError::DuplicateField`](repasando_core::RepasandoError::DuplicateField).
    async fn save(&self, user: &User) -> RepasandoResult<User>;

    /// Deletes a user.
    async fn delete_by_id(&self, id: UserId) -> RepasandoResult<()>;
}
