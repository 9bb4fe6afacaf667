//! CLI command definitions and dispatch.

pub mod admin;
pub mod leave;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use leaveboard_core::config::AppConfig;
use leaveboard_core::error::AppError;
use leaveboard_database::DatabasePool;

use crate::output::OutputFormat;

/// Leaveboard: personnel and leave tracking
#[derive(Debug, Parser)]
#[command(name = "leaveboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Leaveboard server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Site administrator management
    Admin(admin::AdminArgs),
    /// Leave data entry
    Leave(leave::LeaveArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Admin(args) => admin::execute(args, &self.config, self.format).await,
            Commands::Leave(args) => leave::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
