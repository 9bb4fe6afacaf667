//! # leaveboard-database
//!
//! PostgreSQL connection management plus the personnel (credential) and
//! leave stores. Each store is a trait with a PostgreSQL implementation
//! and an in-memory implementation for single-process use and tests.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{
    LeaveStore, MemoryLeaveStore, MemoryPersonnelStore, PersonnelStore, PgLeaveRepository,
    PgPersonnelRepository,
};
