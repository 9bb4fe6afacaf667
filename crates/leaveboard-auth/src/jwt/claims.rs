//! JWT claims structure carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token payload: `{ "personnel": { "id": ... }, "iat": ..., "exp": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated personnel.
    pub personnel: PersonnelClaim,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Identity section of the claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelClaim {
    /// Personnel identifier.
    pub id: Uuid,
}

impl Claims {
    /// Returns the personnel ID this token was issued for.
    pub fn personnel_id(&self) -> Uuid {
        self.personnel.id
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}
