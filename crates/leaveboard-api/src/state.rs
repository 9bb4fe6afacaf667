//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use leaveboard_auth::jwt::{JwtDecoder, JwtEncoder};
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::config::AppConfig;
use leaveboard_core::result::AppResult;
use leaveboard_core::traits::{Clock, SystemClock};
use leaveboard_database::{LeaveStore, PersonnelStore, PgLeaveRepository, PgPersonnelRepository};
use leaveboard_service::{AuthService, LeaveService, PersonnelService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and personnel views
    pub personnel_service: Arc<PersonnelService>,
    /// Credential login
    pub auth_service: Arc<AuthService>,
    /// Leave calendar reads
    pub leave_service: Arc<LeaveService>,
}

impl AppState {
    /// Wires services over the given stores and clock.
    pub fn new(
        config: AppConfig,
        personnel_store: Arc<dyn PersonnelStore>,
        leave_store: Arc<dyn LeaveStore>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth, Arc::clone(&clock)));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, clock));

        let personnel_service = Arc::new(PersonnelService::new(
            Arc::clone(&personnel_store),
            Arc::clone(&leave_store),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&personnel_store),
            password_hasher,
            jwt_encoder,
        )?);
        let leave_service = Arc::new(LeaveService::new(personnel_store, leave_store));

        Ok(Self {
            config: Arc::new(config),
            jwt_decoder,
            personnel_service,
            auth_service,
            leave_service,
        })
    }

    /// Wires services over PostgreSQL stores and the system clock.
    pub fn with_pool(config: AppConfig, db_pool: PgPool) -> AppResult<Self> {
        Self::new(
            config,
            Arc::new(PgPersonnelRepository::new(db_pool.clone())),
            Arc::new(PgLeaveRepository::new(db_pool)),
            Arc::new(SystemClock),
        )
    }
}
