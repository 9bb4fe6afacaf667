//! Personnel domain entities.

pub mod model;
pub mod role;

pub use model::{CreatePersonnel, Personnel, normalize_email};
pub use role::PersonnelRole;
