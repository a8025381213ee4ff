//! Repository trait definitions.

use async_trait::async_trait;
use repasando_core::{Page, PageRequest, RepasandoResult, User, UserId};

/// User repository trait.
///
/// `save` fails with [`RepasandoError::UniqueViolation`] when the row would
/// duplicate an existing email or username.
///
/// [`RepasandoError::UniqueViolation`]: repasando_core::RepasandoError::UniqueViolation
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every stored user, ordered by id.
    async fn find_all(&self) -> RepasandoResult<Vec<User>>;

    /// Returns one page of users, ordered by id.
    async fn find_page(&self, page: PageRequest) -> RepasandoResult<Page<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RepasandoResult<Option<User>>;

    /// Inserts the user when it has no id, updates it otherwise.
    /// Returns the row as stored.
    async fn save(&self, user: &User) -> RepasandoResult<User>;

    /// Deletes a user by ID. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: UserId) -> RepasandoResult<()>;

    /// Counts all users.
    async fn count(&self) -> RepasandoResult<u64>;
}
