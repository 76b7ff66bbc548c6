//! Wire shapes of the HR API and their conversion into domain types.
//!
//! Times of day travel as `HH:MM` strings (some endpoints append `:SS`).
//! Values that cannot be parsed become missing endpoints, which the
//! accounting treats as zero duration; they are logged, never fatal.
//! Dates are strict: a record without a valid date fails the whole response.

use crate::api::ApiError;
use crate::libs::workday::{DailyWorkRecord, WorkInterval};
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};

/// Responses come either bare or wrapped in `{"data": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default, alias = "full_name", alias = "title")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawInterval {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyWorkRecord {
    pub id: u64,
    pub date: String,
    #[serde(default)]
    pub job_start_time: Option<String>,
    #[serde(default)]
    pub job_end_time: Option<String>,
    #[serde(default)]
    pub overtime_hours: Option<RawInterval>,
    pub personnel: NamedRef,
    pub company: NamedRef,
    pub job: NamedRef,
}

/// Parses `HH:MM` or `HH:MM:SS`, dropping the seconds. Blank or malformed
/// input yields `None`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
        .and_then(|t| NaiveTime::from_hms_opt(t.hour(), t.minute(), 0));
    if parsed.is_none() {
        tracing::warn!(value, "unparsable time of day treated as missing");
    }
    parsed
}

/// Parses a `YYYY-MM-DD` date, ignoring any time part that follows it.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_interval(start: Option<&str>, end: Option<&str>) -> WorkInterval {
    WorkInterval {
        start: start.and_then(parse_time_of_day),
        end: end.and_then(parse_time_of_day),
    }
}

impl TryFrom<RawDailyWorkRecord> for DailyWorkRecord {
    type Error = ApiError;

    fn try_from(raw: RawDailyWorkRecord) -> Result<Self, Self::Error> {
        let date = parse_date(&raw.date).ok_or_else(|| ApiError::Decode(format!("record #{} has invalid date '{}'", raw.id, raw.date)))?;
        let overtime = raw
            .overtime_hours
            .filter(|ot| ot.start_time.is_some() || ot.end_time.is_some())
            .map(|ot| parse_interval(ot.start_time.as_deref(), ot.end_time.as_deref()));

        Ok(DailyWorkRecord {
            id: raw.id,
            worker_id: raw.personnel.id,
            worker_name: raw.personnel.name,
            date,
            regular: parse_interval(raw.job_start_time.as_deref(), raw.job_end_time.as_deref()),
            overtime,
            company_id: raw.company.id,
            job_id: raw.job.id,
        })
    }
}

/// Converts a batch of raw records, failing on the first invalid one.
pub fn into_records(raw: Vec<RawDailyWorkRecord>) -> Result<Vec<DailyWorkRecord>, ApiError> {
    raw.into_iter().map(DailyWorkRecord::try_from).collect()
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeHours {
    #[serde(serialize_with = "serialize_time")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_time")]
    pub end_time: NaiveTime,
}

/// Body of the admin "update hours" call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateHours {
    #[serde(serialize_with = "serialize_time")]
    pub job_start_time: NaiveTime,
    #[serde(serialize_with = "serialize_time")]
    pub job_end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<OvertimeHours>,
}

impl UpdateHours {
    pub fn new(job_start_time: NaiveTime, job_end_time: NaiveTime) -> Self {
        Self {
            job_start_time,
            job_end_time,
            overtime_hours: None,
        }
    }

    pub fn with_overtime(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.overtime_hours = Some(OvertimeHours { start_time, end_time });
        self
    }
}

/// Body of the admin "assign personnel to a company job" call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAssignment {
    pub personnel_id: u64,
    pub company_id: u64,
    pub job_id: u64,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_time")]
    pub job_start_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaveRequest {
    pub id: u64,
    #[serde(default, alias = "type")]
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}
