//! Leave data entry commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use leaveboard_core::error::AppError;
use leaveboard_database::{LeaveStore, PersonnelStore, PgLeaveRepository, PgPersonnelRepository};
use leaveboard_entity::leave::CreateLeave;
use leaveboard_entity::personnel::normalize_email;

use crate::output::{self, OutputFormat};

/// Longest leave accepted from the command line, in days.
const MAX_LEAVE_DAYS: i64 = 3660;

/// Arguments for leave commands
#[derive(Debug, Args)]
pub struct LeaveArgs {
    /// Leave subcommand
    #[command(subcommand)]
    pub command: LeaveCommand,
}

/// Leave subcommands
#[derive(Debug, Subcommand)]
pub enum LeaveCommand {
    /// Record a leave for a personnel
    Add {
        /// Owner's email
        #[arg(short, long)]
        email: String,
        /// Leave category, e.g. "annual" or "sick"
        #[arg(short = 't', long = "type")]
        leave_type: String,
        /// Originally requested start date (YYYY-MM-DD)
        #[arg(short, long)]
        date: chrono::NaiveDate,
        /// Rescheduled start date (YYYY-MM-DD)
        #[arg(short, long)]
        scheduled_date: Option<chrono::NaiveDate>,
        /// Length in days
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(i32).range(1..=MAX_LEAVE_DAYS)
        )]
        duration: i32,
    },
    /// List a personnel's leaves in store order
    List {
        /// Owner's email
        #[arg(short, long)]
        email: String,
    },
}

/// Leave display row for table output
#[derive(Debug, Serialize, Tabled)]
struct LeaveRow {
    id: String,
    leave_type: String,
    start: String,
    duration: i32,
    scheduled: bool,
}

/// Execute leave commands
pub async fn execute(
    args: &LeaveArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let personnel_repo = PgPersonnelRepository::new(pool.clone());
    let leave_repo = PgLeaveRepository::new(pool);

    match &args.command {
        LeaveCommand::Add {
            email,
            leave_type,
            date,
            scheduled_date,
            duration,
        } => {
            let owner = personnel_repo
                .find_by_email(&normalize_email(email))
                .await?
                .ok_or_else(|| AppError::not_found(format!("No personnel with email {email}")))?;

            let leave = leave_repo
                .create(&CreateLeave {
                    personnel_id: owner.id,
                    leave_type: leave_type.clone(),
                    scheduled: scheduled_date.is_some(),
                    original_date: *date,
                    scheduled_date: *scheduled_date,
                    duration: *duration,
                })
                .await?;

            output::print_success(&format!("Leave recorded: /api/leaves/{}", leave.id));
        }
        LeaveCommand::List { email } => {
            let owner = personnel_repo
                .find_by_email(&normalize_email(email))
                .await?
                .ok_or_else(|| AppError::not_found(format!("No personnel with email {email}")))?;

            let rows: Vec<LeaveRow> = leave_repo
                .find_by_personnel(owner.id)
                .await?
                .into_iter()
                .map(|l| LeaveRow {
                    id: l.id.to_string(),
                    start: l.start_date().to_string(),
                    leave_type: l.leave_type,
                    duration: l.duration,
                    scheduled: l.scheduled,
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
