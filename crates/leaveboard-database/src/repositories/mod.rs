//! Store traits and their implementations.
//!
//! [`PersonnelStore`] is the credential store and [`LeaveStore`] holds leave
//! entries. Implementations guarantee atomicity of individual reads and
//! writes only; callers perform no multi-record transactions.

pub mod leave;
pub mod memory;
pub mod personnel;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use leaveboard_core::result::AppResult;
use leaveboard_entity::leave::{CreateLeave, Leave};
use leaveboard_entity::personnel::{CreatePersonnel, Personnel};

pub use leave::PgLeaveRepository;
pub use memory::{MemoryLeaveStore, MemoryPersonnelStore};
pub use personnel::PgPersonnelRepository;

/// Persisted personnel records.
#[async_trait]
pub trait PersonnelStore: Send + Sync + 'static {
    /// Find a personnel record by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Personnel>>;

    /// Find a personnel record by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>>;

    /// Persist a new personnel record.
    ///
    /// Fails with `DuplicateEmail` if the email is already taken.
    async fn create(&self, input: &CreatePersonnel) -> AppResult<Personnel>;
}

/// Persisted leave entries.
#[async_trait]
pub trait LeaveStore: Send + Sync + 'static {
    /// Find a leave by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Leave>>;

    /// All leaves owned by a personnel, in store order.
    async fn find_by_personnel(&self, personnel_id: Uuid) -> AppResult<Vec<Leave>>;

    /// All leaves covering the given day, in store order.
    async fn find_covering(&self, date: NaiveDate) -> AppResult<Vec<Leave>>;

    /// Persist a new leave.
    async fn create(&self, input: &CreateLeave) -> AppResult<Leave>;
}
