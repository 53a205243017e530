//! User repository backed by the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::User;

use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence is reported as `None` / `false`, never as an error. Lookups match
/// on `id` equality and take the first record in insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;

    /// Find the first user with the given ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Append a user as given (no ID assignment, no collision check)
    async fn create(&self, user: User) -> AppResult<User>;

    /// Overwrite name, email, password, role and active flag of the user
    /// matching `user.id`
    async fn update(&self, user: User) -> AppResult<Option<User>>;

    /// Remove the first user with the given ID, returning whether one was found
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository over the shared [`Database`].
pub struct UserStore {
    db: Arc<Database>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.db.read().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.db.len().await)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let users = self.db.read().await;
        let found = users.iter().find(|u| u.id == id).cloned();

        if found.is_none() {
            tracing::debug!(id, "User not found");
        }
        Ok(found)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.db.write().await;
        users.push(user.clone());

        tracing::debug!(id = user.id, total = users.len(), "User created");
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let mut users = self.db.write().await;

        let Some(existing) = users.iter_mut().find(|u| u.id == user.id) else {
            tracing::debug!(id = user.id, "Update skipped, user not found");
            return Ok(None);
        };
        existing.overwrite_with(&user);

        tracing::debug!(id = user.id, "User updated");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut users = self.db.write().await;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                tracing::debug!(id, total = users.len(), "User deleted");
                Ok(true)
            }
            None => {
                tracing::debug!(id, "Delete skipped, user not found");
                Ok(false)
            }
        }
    }
}
