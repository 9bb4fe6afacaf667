//! PostgreSQL leave repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use leaveboard_core::error::{AppError, ErrorKind};
use leaveboard_core::result::AppResult;
use leaveboard_entity::leave::{CreateLeave, Leave};

use super::LeaveStore;

const COLUMNS: &str =
    "id, personnel_id, leave_type, scheduled, original_date, scheduled_date, duration, created_at";

/// Start day of a leave, mirroring `Leave::start_date`.
const START_DATE: &str =
    "(CASE WHEN scheduled AND scheduled_date IS NOT NULL THEN scheduled_date ELSE original_date END)";

/// Repository for leave entries backed by PostgreSQL.
///
/// Store order is the insertion sequence (`seq`).
#[derive(Debug, Clone)]
pub struct PgLeaveRepository {
    pool: PgPool,
}

impl PgLeaveRepository {
    /// Create a new leave repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaveStore for PgLeaveRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Leave>> {
        sqlx::query_as::<_, Leave>(&format!("SELECT {COLUMNS} FROM leaves WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find leave", e))
    }

    async fn find_by_personnel(&self, personnel_id: Uuid) -> AppResult<Vec<Leave>> {
        sqlx::query_as::<_, Leave>(&format!(
            "SELECT {COLUMNS} FROM leaves WHERE personnel_id = $1 ORDER BY seq"
        ))
        .bind(personnel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list leaves by personnel", e)
        })
    }

    async fn find_covering(&self, date: NaiveDate) -> AppResult<Vec<Leave>> {
        sqlx::query_as::<_, Leave>(&format!(
            "SELECT {COLUMNS} FROM leaves \
             WHERE {START_DATE} <= $1 AND $1 - {START_DATE} < GREATEST(duration, 1) \
             ORDER BY seq"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list leaves by day", e))
    }

    async fn create(&self, input: &CreateLeave) -> AppResult<Leave> {
        sqlx::query_as::<_, Leave>(&format!(
            "INSERT INTO leaves \
             (id, personnel_id, leave_type, scheduled, original_date, scheduled_date, duration, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(input.personnel_id)
        .bind(&input.leave_type)
        .bind(input.scheduled)
        .bind(input.original_date)
        .bind(input.scheduled_date)
        .bind(input.duration)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create leave", e))
    }
}
