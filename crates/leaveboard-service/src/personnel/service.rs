//! Personnel registration and lookup.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use leaveboard_auth::access::AccessPolicy;
use leaveboard_auth::jwt::{IssuedToken, JwtEncoder};
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::error::AppError;
use leaveboard_core::result::AppResult;
use leaveboard_database::{LeaveStore, PersonnelStore};
use leaveboard_entity::personnel::{CreatePersonnel, PersonnelRole, normalize_email};

use super::view::PersonnelProfile;
use crate::context::RequestContext;

/// Handles personnel registration and profile reads.
#[derive(Clone)]
pub struct PersonnelService {
    /// Credential store.
    personnel_store: Arc<dyn PersonnelStore>,
    /// Leave store.
    leave_store: Arc<dyn LeaveStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token issuer.
    encoder: Arc<JwtEncoder>,
    /// Read access policy.
    policy: AccessPolicy,
}

/// Input for registering a new personnel. Fields are validated by the caller.
#[derive(Clone)]
pub struct RegisterPersonnel {
    /// Display name.
    pub name: String,
    /// Login email, normalized before storage.
    pub email: String,
    /// Plaintext password. Only its bcrypt hash is stored.
    pub password: String,
    /// Job title.
    pub title: String,
    /// Access role.
    pub role: PersonnelRole,
    /// Organization the personnel belongs to.
    pub org: String,
}

impl std::fmt::Debug for RegisterPersonnel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterPersonnel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("title", &self.title)
            .field("role", &self.role)
            .field("org", &self.org)
            .finish()
    }
}

impl std::fmt::Debug for PersonnelService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonnelService").finish_non_exhaustive()
    }
}

impl PersonnelService {
    /// Creates a new personnel service.
    pub fn new(
        personnel_store: Arc<dyn PersonnelStore>,
        leave_store: Arc<dyn LeaveStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            personnel_store,
            leave_store,
            hasher,
            encoder,
            policy: AccessPolicy::new(),
        }
    }

    /// Registers a new personnel and issues a session token for it.
    ///
    /// The record is not rolled back if token issuance fails afterwards.
    pub async fn register(&self, input: RegisterPersonnel) -> AppResult<IssuedToken> {
        let email = normalize_email(&input.email);

        if self.personnel_store.find_by_email(&email).await?.is_some() {
            info!(email = %email, "Registration rejected: email already exists");
            return Err(AppError::duplicate_email());
        }

        let password_hash = self.hasher.hash_password(&input.password)?;

        let personnel = self
            .personnel_store
            .create(&CreatePersonnel {
                email,
                name: input.name,
                password_hash,
                title: input.title,
                role: input.role,
                org: input.org,
            })
            .await?;

        let token = self.encoder.issue(personnel.id).inspect_err(|e| {
            error!(
                personnel_id = %personnel.id,
                error = %e,
                "Personnel persisted but token issuance failed"
            );
        })?;

        info!(
            personnel_id = %personnel.id,
            role = %personnel.role,
            org = %personnel.org,
            "Personnel registered"
        );

        Ok(token)
    }

    /// Registers a new personnel on behalf of an authenticated requester.
    ///
    /// Only site admins may register personnel.
    pub async fn register_by(
        &self,
        ctx: &RequestContext,
        input: RegisterPersonnel,
    ) -> AppResult<IssuedToken> {
        let requester = ctx.resolve(self.personnel_store.as_ref()).await?;
        self.policy.authorize_registration(&requester)?;
        self.register(input).await
    }

    /// Returns a personnel record with its leaves, if the requester may read it.
    ///
    /// The access decision is made before any leave data is read.
    pub async fn get_personnel(
        &self,
        ctx: &RequestContext,
        personnel_id: Uuid,
    ) -> AppResult<PersonnelProfile> {
        let requester = ctx.resolve(self.personnel_store.as_ref()).await?;
        let target = self.personnel_store.find_by_id(personnel_id).await?;

        self.policy.require(
            &requester,
            personnel_id,
            target.as_ref().map(|p| p.org.as_str()),
        )?;

        let target = target.ok_or_else(|| AppError::not_found("Personnel not found"))?;
        let leaves = self.leave_store.find_by_personnel(target.id).await?;

        Ok(PersonnelProfile::new(&target, &leaves))
    }
}
