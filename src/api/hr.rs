use crate::api::dto::{
    into_records, Envelope, LeaveRequest, LoginCredentials, LoginResponse, NewAssignment, RawDailyWorkRecord, UpdateHours,
};
use crate::api::{ApiError, Session};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::notification::Announcement;
use crate::libs::workday::DailyWorkRecord;
use crate::msg_print;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const TOKEN_FILE: &str = ".hr_session_token";
const LOGIN_URL: &str = "auth/login";
const DAILY_WORK_URL: &str = "daily-work";
const MONTHLY_REPORT_URL: &str = "reports/monthly";
const ANNOUNCEMENTS_URL: &str = "announcements";
const LEAVE_REQUESTS_URL: &str = "leave-requests";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    pub api_url: String,
    #[serde(default)]
    pub login: String,
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "HR API".to_string(),
        }
    }

    pub fn init(config: &Option<ApiConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiLogin.to_string())
                .default(config.login)
                .interact_text()?,
        })
    }
}

pub struct HrClient {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl HrClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            token: None,
        }
    }

    /// A client carrying the cached session token.
    pub fn authenticated(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Self::new(config);
        let token = client.read_token().map_err(|_| ApiError::NotLoggedIn)?;
        Ok(client.with_token(token))
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL of an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status => Err(ApiError::Status(status)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET");
        let response = self.authorize(self.client.get(&url).query(query)).send().await?;
        let body = Self::check(response)?.json::<Envelope<T>>().await?;
        Ok(body.into_inner())
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url).json(body)).send().await?;
        let body = Self::check(response)?.json::<Envelope<T>>().await?;
        Ok(body.into_inner())
    }

    /// Daily work records dated between `from` and `to`, inclusive.
    pub async fn daily_records(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyWorkRecord>, ApiError> {
        let query = [("from", from.format("%Y-%m-%d").to_string()), ("to", to.format("%Y-%m-%d").to_string())];
        let raw: Vec<RawDailyWorkRecord> = self.get(DAILY_WORK_URL, &query).await?;
        into_records(raw)
    }

    /// Creates a daily record assigning a worker to a company job.
    pub async fn create_record(&self, assignment: &NewAssignment) -> Result<DailyWorkRecord, ApiError> {
        let raw: RawDailyWorkRecord = self.post(DAILY_WORK_URL, assignment).await?;
        DailyWorkRecord::try_from(raw)
    }

    /// Sets the regular shift and optional overtime of a record.
    pub async fn update_hours(&self, id: u64, hours: &UpdateHours) -> Result<DailyWorkRecord, ApiError> {
        let raw: RawDailyWorkRecord = self.post(&format!("{}/{}", DAILY_WORK_URL, id), hours).await?;
        DailyWorkRecord::try_from(raw)
    }

    /// Raw per-day records of a month, to be folded with `summarize`.
    pub async fn monthly_report(&self, month: u32, year: i32) -> Result<Vec<DailyWorkRecord>, ApiError> {
        let query = [("month", month.to_string()), ("year", year.to_string())];
        let raw: Vec<RawDailyWorkRecord> = self.get(MONTHLY_REPORT_URL, &query).await?;
        into_records(raw)
    }

    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get(ANNOUNCEMENTS_URL, &[]).await
    }

    pub async fn leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get(LEAVE_REQUESTS_URL, &[]).await
    }
}

impl Session for HrClient {
    async fn login(&self, login: &str, password: &str) -> Result<String, ApiError> {
        let credentials = LoginCredentials { email: login, password };
        let response: LoginResponse = self.post(LOGIN_URL, &credentials).await?;
        Ok(response.token)
    }

    fn token_file(&self) -> &str {
        TOKEN_FILE
    }
}
