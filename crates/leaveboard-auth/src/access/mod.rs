//! Role-based read decisions over personnel records.

pub mod policy;

pub use policy::{AccessPolicy, Decision, Requester};
