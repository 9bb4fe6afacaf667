//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use leaveboard_api::{AppState, build_app};
use leaveboard_auth::jwt::{JwtDecoder, JwtEncoder};
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::config::{AppConfig, AuthConfig};
use leaveboard_core::traits::ManualClock;
use leaveboard_database::{LeaveStore, MemoryLeaveStore, MemoryPersonnelStore, PersonnelStore};
use leaveboard_entity::leave::{CreateLeave, Leave};
use leaveboard_entity::personnel::{CreatePersonnel, Personnel, PersonnelRole};

/// Password given to every personnel created through [`TestApp::create_personnel`].
pub const PASSWORD: &str = "123456";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Credential store behind the router
    pub personnel: Arc<MemoryPersonnelStore>,
    /// Leave store behind the router
    pub leaves: Arc<MemoryLeaveStore>,
    /// Clock shared with the token issuer and verifier
    pub clock: Arc<ManualClock>,
    /// Issues tokens with the app's secret
    pub encoder: JwtEncoder,
    /// Verifies tokens with the app's secret
    pub decoder: JwtDecoder,
    hasher: PasswordHasher,
}

/// Parsed response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                bcrypt_cost: 4,
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        ));
        let personnel = Arc::new(MemoryPersonnelStore::new());
        let leaves = Arc::new(MemoryLeaveStore::new());

        let state = AppState::new(
            config.clone(),
            personnel.clone(),
            leaves.clone(),
            clock.clone(),
        )
        .expect("Failed to build state");

        Self {
            router: build_app(state),
            encoder: JwtEncoder::new(&config.auth, clock.clone()),
            decoder: JwtDecoder::new(&config.auth, clock.clone()),
            hasher: PasswordHasher::new(&config.auth),
            personnel,
            leaves,
            clock,
        }
    }

    /// Insert a personnel record directly into the store
    pub async fn create_personnel(&self, email: &str, role: PersonnelRole, org: &str) -> Personnel {
        let password_hash = self.hasher.hash_password(PASSWORD).expect("hash");
        self.personnel
            .create(&CreatePersonnel {
                email: email.to_string(),
                name: email.split('@').next().unwrap_or(email).to_string(),
                password_hash,
                title: "Eng".to_string(),
                role,
                org: org.to_string(),
            })
            .await
            .expect("Failed to create personnel")
    }

    /// Insert an unscheduled leave directly into the store
    pub async fn create_leave(
        &self,
        owner: Uuid,
        leave_type: &str,
        original_date: NaiveDate,
        duration: i32,
    ) -> Leave {
        self.leaves
            .create(&CreateLeave {
                personnel_id: owner,
                leave_type: leave_type.to_string(),
                scheduled: false,
                original_date,
                scheduled_date: None,
                duration,
            })
            .await
            .expect("Failed to create leave")
    }

    /// Issue a session token for the given personnel
    pub fn token_for(&self, personnel_id: Uuid) -> String {
        self.encoder.issue(personnel_id).expect("issue").token
    }

    /// Make a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        self.send(req, body).await
    }

    /// Make a request authenticated through the `x-auth-token` header
    pub async fn request_with_auth_header(&self, method: &str, path: &str, token: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("x-auth-token", token);

        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Shorthand for a calendar day
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
