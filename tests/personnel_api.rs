//! Integration tests for personnel registration and profile reads.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use common::{TestApp, day};
use leaveboard_database::PersonnelStore;
use leaveboard_entity::personnel::PersonnelRole;

fn registration(email: &str) -> serde_json::Value {
    json!({
        "name": "A",
        "email": email,
        "password": "123456",
        "title": "Eng",
        "role": "reg-user",
        "org": "Acme",
    })
}

#[tokio::test]
async fn test_register_returns_token_for_new_personnel() {
    let app = TestApp::new();
    let admin = app.create_personnel("admin@x.com", PersonnelRole::SiteAdmin, "Acme").await;
    let admin_token = app.token_for(admin.id);

    let response = app
        .request("POST", "/api/personnel", Some(registration("a@x.com")), Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.body["token"].as_str().expect("token");
    let claims = app.decoder.verify(token).expect("token verifies");

    let stored = app
        .personnel
        .find_by_email("a@x.com")
        .await
        .expect("lookup")
        .expect("stored");
    assert_eq!(claims.personnel_id(), stored.id);
}

#[tokio::test]
async fn test_register_twice_is_duplicate_and_first_token_survives() {
    let app = TestApp::new();
    let admin = app.create_personnel("admin@x.com", PersonnelRole::SiteAdmin, "Acme").await;
    let admin_token = app.token_for(admin.id);

    let first = app
        .request("POST", "/api/personnel", Some(registration("a@x.com")), Some(&admin_token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    let first_token = first.body["token"].as_str().expect("token").to_string();

    let second = app
        .request("POST", "/api/personnel", Some(registration("a@x.com")), Some(&admin_token))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["error"], "DUPLICATE_EMAIL");
    assert_eq!(app.personnel.len().await, 2);

    let claims = app.decoder.verify(&first_token).expect("first token valid");
    let own = app
        .request(
            "GET",
            &format!("/api/personnel/{}", claims.personnel_id()),
            None,
            Some(&first_token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["personnel"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_register_requires_site_admin() {
    let app = TestApp::new();
    let hr = app.create_personnel("hr@x.com", PersonnelRole::HrAdmin, "Acme").await;

    let anonymous = app
        .request("POST", "/api/personnel", Some(registration("a@x.com")), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["message"], "No token, authorization denied");

    let hr_token = app.token_for(hr.id);
    let denied = app
        .request("POST", "/api/personnel", Some(registration("a@x.com")), Some(&hr_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(app.personnel.len().await, 1);
}

#[tokio::test]
async fn test_register_validation_errors_listed() {
    let app = TestApp::new();
    let admin = app.create_personnel("admin@x.com", PersonnelRole::SiteAdmin, "Acme").await;
    let admin_token = app.token_for(admin.id);

    let response = app
        .request(
            "POST",
            "/api/personnel",
            Some(json!({
                "name": "",
                "email": "not-an-email",
                "password": "123",
                "title": "Eng",
                "role": "boss",
                "org": "Acme",
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let fields: Vec<&str> = response.body["details"]
        .as_array()
        .expect("details")
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "name", "password", "role"]);
    assert_eq!(app.personnel.len().await, 1);
}

#[tokio::test]
async fn test_register_rejects_whitespace_only_fields() {
    let app = TestApp::new();
    let admin = app.create_personnel("admin@x.com", PersonnelRole::SiteAdmin, "Acme").await;
    let admin_token = app.token_for(admin.id);

    let response = app
        .request(
            "POST",
            "/api/personnel",
            Some(json!({
                "name": "   ",
                "email": "blank@x.com",
                "password": "123456",
                "title": "  ",
                "role": "HR-admin",
                "org": "   ",
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let fields: Vec<&str> = response.body["details"]
        .as_array()
        .expect("details")
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "org", "title"]);
    assert!(
        app.personnel
            .find_by_email("blank@x.com")
            .await
            .expect("lookup")
            .is_none()
    );
}

#[tokio::test]
async fn test_reg_user_sees_own_leaves_in_store_order() {
    let app = TestApp::new();
    let u1 = app.create_personnel("u1@x.com", PersonnelRole::RegUser, "Acme").await;
    let u2 = app.create_personnel("u2@x.com", PersonnelRole::RegUser, "Acme").await;

    let l1 = app.create_leave(u1.id, "annual", day(2024, 5, 1), 3).await;
    app.create_leave(u2.id, "annual", day(2024, 5, 2), 1).await;
    let l2 = app.create_leave(u1.id, "sick", day(2024, 1, 9), 1).await;

    let token = app.token_for(u1.id);
    let response = app
        .request("GET", &format!("/api/personnel/{}", u1.id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let personnel = &response.body["personnel"];
    assert_eq!(personnel["email"], "u1@x.com");
    assert_eq!(personnel["role"], "reg-user");
    assert_eq!(personnel["org"], "Acme");
    assert!(personnel.get("password_hash").is_none());

    let leaves = personnel["leaves"].as_array().expect("leaves");
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0]["leaveURL"], format!("/api/leaves/{}", l1.id));
    assert_eq!(leaves[0]["leaveType"], "annual");
    assert_eq!(leaves[0]["originalDate"], "2024-05-01");
    assert_eq!(leaves[0]["duration"], 3);
    assert_eq!(leaves[1]["leaveURL"], format!("/api/leaves/{}", l2.id));
    assert_eq!(leaves[1]["personnel"], u1.id.to_string());
}

#[tokio::test]
async fn test_reg_user_cannot_read_peer() {
    let app = TestApp::new();
    let u1 = app.create_personnel("u1@x.com", PersonnelRole::RegUser, "Acme").await;
    let u2 = app.create_personnel("u2@x.com", PersonnelRole::RegUser, "Acme").await;

    let response = app
        .request(
            "GET",
            &format!("/api/personnel/{}", u2.id),
            None,
            Some(&app.token_for(u1.id)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(response.body["message"], "Access denied");
}

#[tokio::test]
async fn test_hr_admin_reads_own_org_only() {
    let app = TestApp::new();
    let hr = app.create_personnel("hr@x.com", PersonnelRole::HrAdmin, "Acme").await;
    let same = app.create_personnel("s@x.com", PersonnelRole::RegUser, "Acme").await;
    let other = app.create_personnel("o@x.com", PersonnelRole::RegUser, "Globex").await;
    let token = app.token_for(hr.id);

    let ok = app
        .request("GET", &format!("/api/personnel/{}", same.id), None, Some(&token))
        .await;
    assert_eq!(ok.status, StatusCode::OK);

    let denied = app
        .request("GET", &format!("/api/personnel/{}", other.id), None, Some(&token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let unknown = app
        .request("GET", &format!("/api/personnel/{}", Uuid::new_v4()), None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_site_admin_unknown_and_malformed_ids() {
    let app = TestApp::new();
    let admin = app.create_personnel("admin@x.com", PersonnelRole::SiteAdmin, "Acme").await;
    let token = app.token_for(admin.id);

    let missing = app
        .request("GET", &format!("/api/personnel/{}", Uuid::new_v4()), None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/api/personnel/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_lifecycle_over_http() {
    let app = TestApp::new();
    let u1 = app.create_personnel("u1@x.com", PersonnelRole::RegUser, "Acme").await;
    let token = app.token_for(u1.id);
    let path = format!("/api/personnel/{}", u1.id);

    let via_header = app.request_with_auth_header("GET", &path, &token).await;
    assert_eq!(via_header.status, StatusCode::OK);

    let mut tampered = token.clone();
    tampered.push('x');
    let invalid = app.request("GET", &path, None, Some(&tampered)).await;
    assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
    assert_eq!(invalid.body["message"], "Token is not valid");

    app.clock.advance(Duration::seconds(3601));
    let expired = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired.body["message"], "Token expired!");
}
