//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::service::UserService;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: ApiConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }
}
