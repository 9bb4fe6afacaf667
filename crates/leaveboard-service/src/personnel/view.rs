//! Response shapes assembled from personnel and leave records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leaveboard_entity::leave::Leave;
use leaveboard_entity::personnel::{Personnel, PersonnelRole};

/// Path at which a single leave can be fetched.
pub fn leave_url(leave_id: Uuid) -> String {
    format!("/api/leaves/{leave_id}")
}

/// A personnel record together with its leave schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelProfile {
    pub email: String,
    pub name: String,
    pub title: String,
    pub role: PersonnelRole,
    pub org: String,
    /// Leaves in store order.
    pub leaves: Vec<LeaveSummary>,
}

impl PersonnelProfile {
    /// Builds a profile from a record and its leaves.
    pub fn new(personnel: &Personnel, leaves: &[Leave]) -> Self {
        Self {
            email: personnel.email.clone(),
            name: personnel.name.clone(),
            title: personnel.title.clone(),
            role: personnel.role,
            org: personnel.org.clone(),
            leaves: leaves.iter().map(LeaveSummary::from).collect(),
        }
    }
}

/// One leave as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub leave_type: String,
    #[serde(rename = "leaveURL")]
    pub leave_url: String,
    /// Owning personnel ID.
    pub personnel: Uuid,
    pub scheduled: bool,
    pub original_date: NaiveDate,
    pub scheduled_date: Option<NaiveDate>,
    pub duration: i32,
}

impl From<&Leave> for LeaveSummary {
    fn from(leave: &Leave) -> Self {
        Self {
            leave_type: leave.leave_type.clone(),
            leave_url: leave_url(leave.id),
            personnel: leave.personnel_id,
            scheduled: leave.scheduled,
            original_date: leave.original_date,
            scheduled_date: leave.scheduled_date,
            duration: leave.duration,
        }
    }
}
