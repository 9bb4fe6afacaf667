//! Request context carrying the authenticated personnel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leaveboard_auth::access::Requester;
use leaveboard_auth::jwt::Claims;
use leaveboard_core::error::AppError;
use leaveboard_core::result::AppResult;
use leaveboard_database::PersonnelStore;

/// Context for the current authenticated request.
///
/// Built from verified session claims and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated personnel's ID.
    pub personnel_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(personnel_id: Uuid) -> Self {
        Self {
            personnel_id,
            request_time: Utc::now(),
        }
    }

    /// Creates a context from verified token claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self::new(claims.personnel_id())
    }

    /// Loads the requester's current record.
    ///
    /// A token whose personnel no longer exists is treated as unauthenticated.
    pub async fn resolve(&self, store: &dyn PersonnelStore) -> AppResult<Requester> {
        store
            .find_by_id(self.personnel_id)
            .await?
            .map(|personnel| Requester::from(&personnel))
            .ok_or_else(|| AppError::authentication("Token is not valid"))
    }
}
