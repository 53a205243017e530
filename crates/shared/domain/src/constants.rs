//! Domain-level constants.

// =============================================================================
// Seed Record
// =============================================================================

/// Id of the record every fresh store starts with
pub const SEED_USER_ID: i32 = 1;

pub const SEED_USER_NAME: &str = "John Doe";

pub const SEED_USER_EMAIL: &str = "example1@email.com";

/// Stored as-is; passwords are never hashed
pub const SEED_USER_PASSWORD: &str = "password";

/// Free-form label, not checked by anything
pub const SEED_USER_ROLE: &str = "Admin";
