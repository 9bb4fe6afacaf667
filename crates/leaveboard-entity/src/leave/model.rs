//! Leave entity model.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled or taken absence owned by one personnel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Leave {
    /// Unique leave identifier.
    pub id: Uuid,
    /// Owning personnel.
    pub personnel_id: Uuid,
    /// Free-form leave category (e.g. "annual", "sick").
    pub leave_type: String,
    /// Whether the leave has been moved to `scheduled_date`.
    pub scheduled: bool,
    /// Date the leave was originally requested for.
    pub original_date: NaiveDate,
    /// Rescheduled date, if any.
    pub scheduled_date: Option<NaiveDate>,
    /// Length in days.
    pub duration: i32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Leave {
    /// The day the leave actually starts.
    pub fn start_date(&self) -> NaiveDate {
        match (self.scheduled, self.scheduled_date) {
            (true, Some(date)) => date,
            _ => self.original_date,
        }
    }

    /// Whether the leave covers `date`. Zero or negative durations count as one day.
    ///
    /// A duration reaching past the last representable date covers every later day.
    pub fn covers(&self, date: NaiveDate) -> bool {
        let start = self.start_date();
        if date < start {
            return false;
        }
        start
            .checked_add_signed(Duration::days(i64::from(self.duration.max(1))))
            .is_none_or(|end| date < end)
    }
}

/// Data required to create a new leave record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeave {
    /// Owning personnel.
    pub personnel_id: Uuid,
    /// Leave category.
    pub leave_type: String,
    /// Whether the leave has been rescheduled.
    pub scheduled: bool,
    /// Original date.
    pub original_date: NaiveDate,
    /// Rescheduled date.
    pub scheduled_date: Option<NaiveDate>,
    /// Length in days.
    pub duration: i32,
}
