//! Infrastructure module.

mod db;

pub use db::Database;
