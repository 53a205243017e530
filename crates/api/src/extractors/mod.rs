//! Request extractors that reject with the standard error body.

mod json;
mod path;

pub use json::AppJson;
pub use path::AppPath;
