pub mod announcements;
pub mod assign;
pub mod hours;
pub mod init;
pub mod leaves;
pub mod login;
pub mod logout;
pub mod records;
pub mod sum;

use crate::api::{ApiError, HrClient, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        about = "Configuration initialization",
        long_about = "Configuration initialization. The HR API module is used by every command. \
                      The live notification module only stores channel settings for applications \
                      that embed the hrdash library; no command reads it."
    )]
    Init(init::InitArgs),
    #[command(about = "Log in to the HR API")]
    Login(login::LoginArgs),
    #[command(about = "Forget the cached session")]
    Logout,
    #[command(about = "Show daily work records with regular, overtime and total hours")]
    Records(records::RecordsArgs),
    #[command(about = "Update working hours of a daily record", arg_required_else_help = true)]
    Hours(hours::HoursArgs),
    #[command(about = "Assign personnel to a company job for a day", arg_required_else_help = true)]
    Assign(assign::AssignArgs),
    #[command(about = "Monthly working hours per worker")]
    Sum(sum::SumArgs),
    #[command(about = "Show announcements")]
    Announcements,
    #[command(about = "Show your leave requests")]
    Leaves,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Records(args) => records::cmd(args).await,
            Commands::Hours(args) => hours::cmd(args).await,
            Commands::Assign(args) => assign::cmd(args).await,
            Commands::Sum(args) => sum::cmd(args).await,
            Commands::Announcements => announcements::cmd().await,
            Commands::Leaves => leaves::cmd().await,
        }
    }
}

/// Client for the configured API carrying the cached session token.
pub(crate) fn client() -> Result<HrClient> {
    let config = Config::read()?.api_config()?;
    HrClient::authenticated(&config).map_err(|e| msg_error_anyhow!(e))
}

/// Turns a failed call into a user-facing error. A rejected token is
/// dropped so the next command asks for a fresh login.
pub(crate) fn api_failure(client: &HrClient, error: ApiError) -> anyhow::Error {
    match error {
        ApiError::Unauthorized => {
            if let Err(e) = client.delete_token() {
                msg_warning!(Message::TokenNotDeleted(e.to_string()));
            }
            msg_error_anyhow!(Message::SessionExpired)
        }
        other => msg_error_anyhow!(Message::RequestFailed(other.to_string())),
    }
}

/// Strict `HH:MM` parser for command-line time arguments.
pub(crate) fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| Message::InvalidTimeInput(value.to_string()).to_string())
}

/// Rejects intervals whose end is before their start.
pub(crate) fn ensure_ordered(start: NaiveTime, end: NaiveTime) -> Result<()> {
    if end < start {
        return Err(msg_error_anyhow!(Message::InvalidInterval {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        }));
    }
    Ok(())
}
