//! Access policy: who may read which personnel record.

use uuid::Uuid;

use leaveboard_core::error::AppError;
use leaveboard_entity::personnel::{Personnel, PersonnelRole};

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The requester may proceed.
    Allow,
    /// The requester may not proceed.
    Deny,
}

impl Decision {
    /// Whether this decision allows access.
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// The authenticated personnel making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    /// Personnel ID.
    pub id: Uuid,
    /// Role at the time the request was resolved.
    pub role: PersonnelRole,
    /// Organization reference.
    pub org: String,
}

impl From<&Personnel> for Requester {
    fn from(personnel: &Personnel) -> Self {
        Self {
            id: personnel.id,
            role: personnel.role,
            org: personnel.org.clone(),
        }
    }
}

/// Decides whether a requester may read a target personnel record.
///
/// Stateless; every decision is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates a new policy.
    pub fn new() -> Self {
        Self
    }

    /// Decides read access to the personnel record `target_id`.
    ///
    /// `target_org` is `None` when no such record exists. HR admins are
    /// denied in that case, so a miss looks the same as a foreign record.
    pub fn authorize(
        &self,
        requester: &Requester,
        target_id: Uuid,
        target_org: Option<&str>,
    ) -> Decision {
        let allowed = match requester.role {
            PersonnelRole::SiteAdmin => true,
            PersonnelRole::HrAdmin => target_org.is_some_and(|org| org == requester.org),
            PersonnelRole::RegUser => target_id == requester.id,
        };

        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }

    /// Like [`authorize`](Self::authorize) but returns an authorization
    /// error on `Deny`.
    pub fn require(
        &self,
        requester: &Requester,
        target_id: Uuid,
        target_org: Option<&str>,
    ) -> Result<(), AppError> {
        match self.authorize(requester, target_id, target_org) {
            Decision::Allow => Ok(()),
            Decision::Deny => {
                tracing::warn!(
                    requester = %requester.id,
                    role = %requester.role,
                    target = %target_id,
                    "Personnel access denied"
                );
                Err(AppError::authorization("Access denied"))
            }
        }
    }

    /// Only site admins may register new personnel.
    pub fn authorize_registration(&self, requester: &Requester) -> Result<(), AppError> {
        if requester.role == PersonnelRole::SiteAdmin {
            Ok(())
        } else {
            tracing::warn!(
                requester = %requester.id,
                role = %requester.role,
                "Registration denied"
            );
            Err(AppError::authorization("Access denied"))
        }
    }
}
