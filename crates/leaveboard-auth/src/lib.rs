//! # leaveboard-auth
//!
//! Authentication and authorization primitives for Leaveboard.
//!
//! ## Modules
//!
//! - `password`: bcrypt password hashing and verification
//! - `jwt`: session token issuance and verification
//! - `access`: role-based read decisions over personnel records

pub mod access;
pub mod jwt;
pub mod password;

pub use access::{AccessPolicy, Decision, Requester};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
