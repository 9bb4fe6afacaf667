//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use leaveboard_core::error::AppError;
use leaveboard_entity::personnel::PersonnelRole;
use leaveboard_service::RegisterPersonnel;

/// Register personnel request body.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPersonnelRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    #[validate(custom(function = "validate_org"))]
    pub org: String,
}

impl std::fmt::Debug for RegisterPersonnelRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterPersonnelRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("title", &self.title)
            .field("role", &self.role)
            .field("org", &self.org)
            .finish()
    }
}

impl RegisterPersonnelRequest {
    /// Converts a validated request into service input.
    pub fn into_input(self) -> Result<RegisterPersonnel, AppError> {
        Ok(RegisterPersonnel {
            role: self.role.parse()?,
            name: self.name.trim().to_string(),
            email: self.email,
            password: self.password,
            title: self.title.trim().to_string(),
            org: self.org.trim().to_string(),
        })
    }
}

fn required(value: &str, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(code).with_message(message.into()));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    required(name, "name", "Name is required")
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    required(title, "title", "Title is required")
}

fn validate_org(org: &str) -> Result<(), ValidationError> {
    required(org, "org", "Organization is required")
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<PersonnelRole>().map(|_| ()).map_err(|_| {
        ValidationError::new("role")
            .with_message("Role must be either HR-admin or site-admin or reg-user".into())
    })
}

/// Login request body.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Query string selecting one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDayQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LeaveDayQuery {
    /// The selected day, if it exists on the calendar.
    pub fn date(&self) -> Result<NaiveDate, AppError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid date: {}-{}-{}",
                self.year, self.month, self.day
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str) -> RegisterPersonnelRequest {
        RegisterPersonnelRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "123456".to_string(),
            title: "Eng".to_string(),
            role: role.to_string(),
            org: "Acme".to_string(),
        }
    }

    #[test]
    fn test_register_request_validation() {
        assert!(request("reg-user").validate().is_ok());
        assert!(request("HR-admin").validate().is_ok());

        let errors = request("hr-admin").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));

        let mut short = request("reg-user");
        short.password = "12345".to_string();
        short.email = "not-an-email".to_string();
        let errors = short.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_blank_text_fields_rejected() {
        let mut blank = request("HR-admin");
        blank.name = "   ".to_string();
        blank.title = "\t".to_string();
        blank.org = " ".to_string();

        let errors = blank.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("org"));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", request("reg-user"));
        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("123456"));

        let login = LoginRequest {
            email: "a@x.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(!format!("{login:?}").contains("hunter22"));
    }

    #[test]
    fn test_into_input_parses_role() {
        let input = request("site-admin").into_input().expect("input");
        assert_eq!(input.role, PersonnelRole::SiteAdmin);
    }

    #[test]
    fn test_leave_day_query() {
        let ok = LeaveDayQuery { year: 2024, month: 2, day: 29 };
        assert_eq!(ok.date().expect("leap day"), NaiveDate::from_ymd_opt(2024, 2, 29).expect("date"));

        let bad = LeaveDayQuery { year: 2023, month: 2, day: 29 };
        assert!(bad.date().is_err());
    }
}
