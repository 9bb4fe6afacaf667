//! Personnel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::PersonnelRole;

/// A registered employee in the Leaveboard system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Personnel {
    /// Unique personnel identifier.
    pub id: Uuid,
    /// Unique login email, stored trimmed and lower-cased.
    pub email: String,
    /// Full name.
    pub name: String,
    /// bcrypt password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Job title.
    pub title: String,
    /// Authorization role.
    pub role: PersonnelRole,
    /// Organization reference.
    pub org: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new personnel record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonnel {
    /// Email address (already normalized).
    pub email: String,
    /// Full name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Job title.
    pub title: String,
    /// Assigned role.
    pub role: PersonnelRole,
    /// Organization reference.
    pub org: String,
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.com "), "a@x.com");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let personnel = Personnel {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            title: "Eng".to_string(),
            role: PersonnelRole::RegUser,
            org: "Acme".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&personnel).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "reg-user");
    }
}
