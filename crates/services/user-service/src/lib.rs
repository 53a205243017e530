//! User Service Library
//!
//! Layered user management over an in-memory store:
//! `UserService` → `UserRepository` → `Database`.
//! The HTTP entry point depends only on the [`service::UserService`] trait.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Wire the repository and service layers on top of a shared store.
pub fn build_user_service(db: Arc<Database>) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db));
    Arc::new(UserManager::new(user_repo))
}
