//! Leave calendar reads.

pub mod service;

pub use service::LeaveService;
