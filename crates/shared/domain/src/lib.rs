//! Domain layer - Core business entities.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! The user record is shared by the service layer and the HTTP entry point.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::User;
