//! Credential login.

pub mod service;

pub use service::AuthService;
