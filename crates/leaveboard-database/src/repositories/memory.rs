//! In-memory stores using Tokio locks for single-process deployments and tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use leaveboard_core::error::AppError;
use leaveboard_core::result::AppResult;
use leaveboard_entity::leave::{CreateLeave, Leave};
use leaveboard_entity::personnel::{CreatePersonnel, Personnel};

use super::{LeaveStore, PersonnelStore};

/// In-memory personnel store. Records keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryPersonnelStore {
    records: RwLock<Vec<Personnel>>,
}

impl MemoryPersonnelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PersonnelStore for MemoryPersonnelStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Personnel>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.email == email).cloned())
    }

    async fn create(&self, input: &CreatePersonnel) -> AppResult<Personnel> {
        let mut records = self.records.write().await;
        if records.iter().any(|p| p.email == input.email) {
            return Err(AppError::duplicate_email());
        }

        let personnel = Personnel {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            name: input.name.clone(),
            password_hash: input.password_hash.clone(),
            title: input.title.clone(),
            role: input.role,
            org: input.org.clone(),
            created_at: Utc::now(),
        };
        records.push(personnel.clone());
        Ok(personnel)
    }
}

/// In-memory leave store. Records keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryLeaveStore {
    records: RwLock<Vec<Leave>>,
}

impl MemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaveStore for MemoryLeaveStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Leave>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_personnel(&self, personnel_id: Uuid) -> AppResult<Vec<Leave>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|l| l.personnel_id == personnel_id)
            .cloned()
            .collect())
    }

    async fn find_covering(&self, date: NaiveDate) -> AppResult<Vec<Leave>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|l| l.covers(date)).cloned().collect())
    }

    async fn create(&self, input: &CreateLeave) -> AppResult<Leave> {
        let leave = Leave {
            id: Uuid::new_v4(),
            personnel_id: input.personnel_id,
            leave_type: input.leave_type.clone(),
            scheduled: input.scheduled,
            original_date: input.original_date,
            scheduled_date: input.scheduled_date,
            duration: input.duration,
            created_at: Utc::now(),
        };
        self.records.write().await.push(leave.clone());
        Ok(leave)
    }
}
