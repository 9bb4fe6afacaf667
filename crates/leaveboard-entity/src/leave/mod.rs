//! Leave domain entities.

pub mod model;

pub use model::{CreateLeave, Leave};
