//! # leaveboard-service
//!
//! Business logic service layer for Leaveboard. Each service orchestrates
//! the stores, the password hasher, the session issuer, and the access
//! policy to implement one group of use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod leave;
pub mod personnel;

#[cfg(test)]
mod testing;

pub use auth::AuthService;
pub use context::RequestContext;
pub use leave::LeaveService;
pub use personnel::{LeaveSummary, PersonnelProfile, PersonnelService, RegisterPersonnel};
