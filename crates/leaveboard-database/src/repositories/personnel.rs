//! PostgreSQL personnel repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use leaveboard_core::error::{AppError, ErrorKind};
use leaveboard_core::result::AppResult;
use leaveboard_entity::personnel::{CreatePersonnel, Personnel};

use super::PersonnelStore;

const COLUMNS: &str = "id, email, name, password_hash, title, role, org, created_at";

/// Repository for personnel records backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPersonnelRepository {
    pool: PgPool,
}

impl PgPersonnelRepository {
    /// Create a new personnel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonnelStore for PgPersonnelRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Personnel>> {
        sqlx::query_as::<_, Personnel>(&format!("SELECT {COLUMNS} FROM personnel WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find personnel by id", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>> {
        sqlx::query_as::<_, Personnel>(&format!(
            "SELECT {COLUMNS} FROM personnel WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find personnel by email", e)
        })
    }

    async fn create(&self, input: &CreatePersonnel) -> AppResult<Personnel> {
        sqlx::query_as::<_, Personnel>(&format!(
            "INSERT INTO personnel (id, email, name, password_hash, title, role, org, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.password_hash)
        .bind(&input.title)
        .bind(input.role)
        .bind(&input.org)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::duplicate_email();
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to create personnel", e)
        })
    }
}
