//! User service implementations.

use crate::user_service::UserService;
use async_trait::async_trait;
use repasando_core::{Page, PageRequest, RepasandoError, RepasandoResult, User, UserId};
use repasando_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service over any [`UserRepository`].
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn find_all(&self) -> RepasandoResult<Vec<User>> {
        debug!("Listing all users");
        self.user_repository.find_all().await
    }

    async fn find_page(&self, page: PageRequest) -> RepasandoResult<Page<User>> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);
        self.user_repository.find_page(page).await
    }

    async fn find_by_id(&self, id: UserId) -> RepasandoResult<Option<User>> {
        debug!("Getting user: {}", id);
        self.user_repository.find_by_id(id).await
    }

    async fn save(&self, user: &User) -> RepasandoResult<User> {
        debug!("Saving user: {}", user.user_name);

        let saved = self.user_repository.save(user).await.map_err(|e| match e {
            RepasandoError::UniqueViolation(detail) => {
                warn!("Rejected duplicate email or username: {}", detail);
                RepasandoError::duplicate_field()
            }
            other => other,
        })?;

        if let Some(id) = saved.id {
            info!("User saved: {}", id);
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: UserId) -> RepasandoResult<()> {
        debug!("Deleting user: {}", id);
        self.user_repository.delete_by_id(id).await?;
        info!("User deleted: {}", id);
        Ok(())
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
