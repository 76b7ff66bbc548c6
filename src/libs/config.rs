//! Configuration management for hrdash.
//!
//! Settings live in `config.json` in the platform data directory
//! (see [`DataStorage`]). Each integration is an optional module that can be
//! set up independently through the interactive wizard run by `hrdash init`:
//!
//! - **API**: base URL of the HR REST API and the login used for `hrdash login`
//! - **Push**: channel and event names of the live notification channel, and
//!   the user id that scopes leave status events. Read by applications that
//!   embed the library through [`Config::push_config`]; the CLI commands do
//!   not use it
//!
//! The session token is not part of the configuration; it is stored in its
//! own file by [`Session`](crate::api::Session).
//!
//! ## Environment
//!
//! `HRDASH_API_URL` overrides the configured API URL. A `.env` file in the
//! working directory is loaded at startup, so the override can live there.
//!
//! ```rust,no_run
//! use hrdash::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(push) = &config.push {
//!     println!("Leave status updates for user {}", push.user_id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::hr::ApiConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "HRDASH_API_URL";

/// A configurable module shown in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Live notification channel settings.
///
/// Announcements are broadcast on one shared channel. Leave status updates
/// are published on a per-user channel named `<leave_status_channel>.<user_id>`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PushConfig {
    /// Id of the logged-in user, scopes the leave status channel.
    pub user_id: u64,
    pub announcement_channel: String,
    pub announcement_event: String,
    pub leave_status_channel: String,
    pub leave_status_event: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        PushConfig {
            user_id: 0,
            announcement_channel: "announcements".to_string(),
            announcement_event: "announcement".to_string(),
            leave_status_channel: "leave-status".to_string(),
            leave_status_event: "leave-status-updated".to_string(),
        }
    }
}

impl PushConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "push".to_string(),
            name: "Live notifications (library embedders only)".to_string(),
        }
    }

    pub fn init(config: &Option<PushConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModulePush);
        Ok(Self {
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPushUserId.to_string())
                .default(default.user_id)
                .interact_text()?,
            announcement_channel: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAnnouncementChannel.to_string())
                .default(default.announcement_channel)
                .interact_text()?,
            announcement_event: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAnnouncementEvent.to_string())
                .default(default.announcement_event)
                .interact_text()?,
            leave_status_channel: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLeaveStatusChannel.to_string())
                .default(default.leave_status_channel)
                .interact_text()?,
            leave_status_event: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLeaveStatusEvent.to_string())
                .default(default.leave_status_event)
                .interact_text()?,
        })
    }
}

/// Root configuration. Unconfigured modules are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<PushConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing files are ignored.
    pub fn delete_from(storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// API settings with `url_override` applied.
    ///
    /// An override alone is enough to talk to the API; the login is then empty.
    pub fn resolve_api(&self, url_override: Option<String>) -> Option<ApiConfig> {
        match (self.api.clone(), url_override) {
            (Some(api), Some(api_url)) => Some(ApiConfig { api_url, ..api }),
            (Some(api), None) => Some(api),
            (None, Some(api_url)) => Some(ApiConfig {
                api_url,
                login: String::new(),
            }),
            (None, None) => None,
        }
    }

    /// API settings after the environment override, or an error telling the
    /// user to run `init`.
    pub fn api_config(&self) -> Result<ApiConfig> {
        let url_override = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty());
        self.resolve_api(url_override).ok_or_else(|| msg_error_anyhow!(Message::ApiNotConfigured))
    }

    pub fn push_config(&self) -> Result<PushConfig> {
        self.push.clone().ok_or_else(|| msg_error_anyhow!(Message::PushNotConfigured))
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![ApiConfig::module(), PushConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "push" => config.push = Some(PushConfig::init(&config.push)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
