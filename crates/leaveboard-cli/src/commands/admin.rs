//! Site administrator management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use leaveboard_api::dto::request::RegisterPersonnelRequest;
use leaveboard_auth::jwt::JwtEncoder;
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::error::AppError;
use leaveboard_core::traits::SystemClock;
use leaveboard_database::{PersonnelStore, PgLeaveRepository, PgPersonnelRepository};
use leaveboard_entity::personnel::{PersonnelRole, normalize_email};
use leaveboard_service::PersonnelService;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a site administrator (bootstraps an empty installation)
    Create {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Organization
        #[arg(short, long)]
        org: Option<String>,
        /// Job title
        #[arg(short, long, default_value = "Administrator")]
        title: String,
    },
}

/// Personnel display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PersonnelRow {
    id: String,
    email: String,
    name: String,
    role: String,
    org: String,
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    let personnel_store = Arc::new(PgPersonnelRepository::new(pool.clone()));
    let service = PersonnelService::new(
        personnel_store.clone(),
        Arc::new(PgLeaveRepository::new(pool)),
        Arc::new(PasswordHasher::new(&config.auth)),
        Arc::new(JwtEncoder::new(&config.auth, Arc::new(SystemClock))),
    );

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
            org,
            title,
        } => {
            let name = prompt_or(name, "Full name")?;
            let email = prompt_or(email, "Email")?;
            let org = prompt_or(org, "Organization")?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let request = RegisterPersonnelRequest {
                name,
                email,
                password,
                title: title.clone(),
                role: PersonnelRole::SiteAdmin.to_string(),
                org,
            };
            request
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let email = normalize_email(&request.email);
            service.register(request.into_input()?).await?;

            let created = personnel_store
                .find_by_email(&email)
                .await?
                .ok_or_else(|| AppError::internal("Created administrator not found"))?;

            output::print_success("Site administrator created.");
            output::print_list(
                &[PersonnelRow {
                    id: created.id.to_string(),
                    email: created.email,
                    name: created.name,
                    role: created.role.to_string(),
                    org: created.org,
                }],
                format,
            );
        }
    }

    Ok(())
}

fn prompt_or(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
