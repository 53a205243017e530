//! User service - entry point for user use cases.
//!
//! Forwards every call to the repository unchanged. This is the seam where
//! business rules would go; there are none yet.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Mirrors [`UserRepository`] one-for-one.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;

    /// Get user by ID, `None` if absent
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;

    /// Store a new user
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Overwrite an existing user, `None` if absent
    async fn update_user(&self, user: User) -> AppResult<Option<User>>;

    /// Delete user by ID, `false` if absent
    async fn delete_user(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        self.repo.create(user).await
    }

    async fn update_user(&self, user: User) -> AppResult<Option<User>> {
        self.repo.update(user).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<bool> {
        self.repo.delete(id).await
    }
}
