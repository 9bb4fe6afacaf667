//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthPersonnel;
pub use json::ValidatedJson;
pub use path::parse_uuid;
