//! Day listings and single-leave lookups, filtered by the access policy.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use leaveboard_auth::access::{AccessPolicy, Requester};
use leaveboard_core::error::AppError;
use leaveboard_core::result::AppResult;
use leaveboard_database::{LeaveStore, PersonnelStore};

use crate::context::RequestContext;
use crate::personnel::LeaveSummary;

/// Serves leave data to authenticated personnel.
#[derive(Clone)]
pub struct LeaveService {
    personnel_store: Arc<dyn PersonnelStore>,
    leave_store: Arc<dyn LeaveStore>,
    policy: AccessPolicy,
}

impl std::fmt::Debug for LeaveService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaveService").finish_non_exhaustive()
    }
}

impl LeaveService {
    /// Creates a new leave service.
    pub fn new(personnel_store: Arc<dyn PersonnelStore>, leave_store: Arc<dyn LeaveStore>) -> Self {
        Self {
            personnel_store,
            leave_store,
            policy: AccessPolicy::new(),
        }
    }

    /// Leaves covering `date` whose owners the requester may read.
    pub async fn leaves_on(
        &self,
        ctx: &RequestContext,
        date: NaiveDate,
    ) -> AppResult<Vec<LeaveSummary>> {
        let requester = ctx.resolve(self.personnel_store.as_ref()).await?;
        let leaves = self.leave_store.find_covering(date).await?;

        let mut visible_owners: HashMap<Uuid, bool> = HashMap::new();
        let mut visible = Vec::with_capacity(leaves.len());

        for leave in &leaves {
            let allowed = match visible_owners.get(&leave.personnel_id) {
                Some(allowed) => *allowed,
                None => {
                    let allowed = self.may_read_owner(&requester, leave.personnel_id).await?;
                    visible_owners.insert(leave.personnel_id, allowed);
                    allowed
                }
            };
            if allowed {
                visible.push(LeaveSummary::from(leave));
            }
        }

        debug!(
            personnel_id = %requester.id,
            %date,
            total = leaves.len(),
            visible = visible.len(),
            "Listed leaves for day"
        );

        Ok(visible)
    }

    /// A single leave, if the requester may read its owner.
    pub async fn get_leave(&self, ctx: &RequestContext, leave_id: Uuid) -> AppResult<LeaveSummary> {
        let requester = ctx.resolve(self.personnel_store.as_ref()).await?;
        let leave = self
            .leave_store
            .find_by_id(leave_id)
            .await?
            .ok_or_else(|| AppError::not_found("Leave not found"))?;

        let owner = self.personnel_store.find_by_id(leave.personnel_id).await?;
        self.policy.require(
            &requester,
            leave.personnel_id,
            owner.as_ref().map(|p| p.org.as_str()),
        )?;

        Ok(LeaveSummary::from(&leave))
    }

    async fn may_read_owner(&self, requester: &Requester, owner_id: Uuid) -> AppResult<bool> {
        let owner = self.personnel_store.find_by_id(owner_id).await?;
        Ok(self
            .policy
            .authorize(requester, owner_id, owner.as_ref().map(|p| p.org.as_str()))
            .is_allowed())
    }
}
