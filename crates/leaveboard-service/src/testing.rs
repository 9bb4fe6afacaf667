//! Shared fixtures for service unit tests.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use leaveboard_auth::jwt::{JwtDecoder, JwtEncoder};
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::config::AuthConfig;
use leaveboard_core::traits::ManualClock;
use leaveboard_database::{LeaveStore, MemoryLeaveStore, MemoryPersonnelStore, PersonnelStore};
use leaveboard_entity::leave::{CreateLeave, Leave};
use leaveboard_entity::personnel::{CreatePersonnel, Personnel, PersonnelRole};

pub(crate) struct Fixture {
    pub clock: Arc<ManualClock>,
    pub personnel: Arc<MemoryPersonnelStore>,
    pub leaves: Arc<MemoryLeaveStore>,
    pub hasher: Arc<PasswordHasher>,
    pub encoder: Arc<JwtEncoder>,
    pub decoder: Arc<JwtDecoder>,
}

impl Fixture {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        ));
        let config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };
        Self {
            personnel: Arc::new(MemoryPersonnelStore::new()),
            leaves: Arc::new(MemoryLeaveStore::new()),
            hasher: Arc::new(PasswordHasher::with_cost(4)),
            encoder: Arc::new(JwtEncoder::new(&config, clock.clone())),
            decoder: Arc::new(JwtDecoder::new(&config, clock.clone())),
            clock,
        }
    }

    pub async fn add_personnel(&self, email: &str, role: PersonnelRole, org: &str) -> Personnel {
        let password_hash = self.hasher.hash_password("123456").expect("hash");
        self.personnel
            .create(&CreatePersonnel {
                email: email.to_string(),
                name: email.to_string(),
                password_hash,
                title: "Eng".to_string(),
                role,
                org: org.to_string(),
            })
            .await
            .expect("create personnel")
    }

    pub async fn add_leave(&self, owner: Uuid, leave_type: &str, original: NaiveDate, duration: i32) -> Leave {
        self.leaves
            .create(&CreateLeave {
                personnel_id: owner,
                leave_type: leave_type.to_string(),
                scheduled: false,
                original_date: original,
                scheduled_date: None,
                duration,
            })
            .await
            .expect("create leave")
    }
}

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
