//! Client side of the HR REST API.
//!
//! ## Features
//!
//! - **Daily work records**: list by date range, create assignments, update hours
//! - **Monthly report**: raw per-day records for a month, folded locally
//! - **Announcements and leave requests**: history for the notification views
//! - **Session**: opaque bearer token cached in the data directory
//!
//! Every call performs exactly one request. Failures are returned to the
//! caller as an [`ApiError`]; nothing is retried automatically.
//!
//! ```rust,no_run
//! use hrdash::api::hr::HrClient;
//! use hrdash::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?.api_config()?;
//! let client = HrClient::authenticated(&config)?;
//! let records = client.monthly_report(5, 2025).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use reqwest::StatusCode;
use std::fs;
use std::io::Write;
use thiserror::Error;

pub mod dto;
pub mod hr;

pub use hr::{ApiConfig, HrClient};

/// Failures of a single API call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not logged in, run `hrdash login` first")]
    NotLoggedIn,

    #[error("the server rejected the session token")]
    Unauthorized,

    #[error("the server responded with {0}")]
    Status(StatusCode),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Session token management shared by API clients.
///
/// The token is opaque: it is obtained from `login`, stored as-is and sent
/// back as a bearer token.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Exchanges credentials for a session token.
    async fn login(&self, login: &str, password: &str) -> Result<String, ApiError>;

    /// File name of the cached token inside the data directory.
    fn token_file(&self) -> &str;

    /// Directory the token file lives in.
    fn storage(&self) -> DataStorage {
        DataStorage::new()
    }

    fn read_token(&self) -> Result<String> {
        let path = self.storage().get_path(self.token_file())?;
        let token = fs::read_to_string(path)?.trim().to_string();
        if token.is_empty() {
            anyhow::bail!("empty session token");
        }
        Ok(token)
    }

    fn write_token(&self, token: &str) -> Result<()> {
        let path = self.storage().get_path(self.token_file())?;
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }

    /// Deletes the cached token. Returns `false` if there was none.
    fn delete_token(&self) -> Result<bool> {
        let path = self.storage().get_path(self.token_file())?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}
