//! # leaveboard-entity
//!
//! Domain entity models for Leaveboard. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod leave;
pub mod personnel;
