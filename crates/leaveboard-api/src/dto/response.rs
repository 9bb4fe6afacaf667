//! Response DTOs.

use serde::{Deserialize, Serialize};

use leaveboard_service::{LeaveSummary, PersonnelProfile};

/// `{ "token": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token.
    pub token: String,
}

/// `{ "personnel": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonnelResponse {
    pub personnel: PersonnelProfile,
}

/// `{ "leaves": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeavesResponse {
    pub leaves: Vec<LeaveSummary>,
}

/// `{ "leave": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveResponse {
    pub leave: LeaveSummary,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the server is serving requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
