//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    SEED_USER_EMAIL, SEED_USER_ID, SEED_USER_NAME, SEED_USER_PASSWORD, SEED_USER_ROLE,
};

/// User domain entity.
///
/// `id` is assigned by the caller and is not checked for uniqueness;
/// lookups resolve to the first record carrying a given id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Caller-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "example1@email.com"))]
    pub email: String,
    /// Plain text, never hashed
    pub password: String,
    /// Free-form role label
    #[cfg_attr(feature = "openapi", schema(example = "Admin"))]
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user; both timestamps are set to now
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The record a fresh store is seeded with
    pub fn seed() -> Self {
        Self::new(
            SEED_USER_ID,
            SEED_USER_NAME,
            SEED_USER_EMAIL,
            SEED_USER_PASSWORD,
            SEED_USER_ROLE,
            true,
        )
    }

    /// Copy the mutable fields from `changes` and bump `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn overwrite_with(&mut self, changes: &User) {
        self.name = changes.name.clone();
        self.email = changes.email.clone();
        self.password = changes.password.clone();
        self.role = changes.role.clone();
        self.is_active = changes.is_active;
        self.touch();
    }

    /// Set `updated_at` to now, never moving it backwards
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
