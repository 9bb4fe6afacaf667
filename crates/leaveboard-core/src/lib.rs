//! # leaveboard-core
//!
//! Core crate for Leaveboard. Contains configuration schemas, the clock
//! abstraction used for token expiry, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Leaveboard crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
