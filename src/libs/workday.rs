//! Domain types for daily work records and their durations.
//!
//! A [`DailyWorkRecord`] is one worker's day on one company/job assignment:
//! a regular shift and an optional overtime span, both expressed as naive
//! time-of-day pairs on the record's date. Overnight intervals are not modeled.
//!
//! [`WorkDuration`] is the normalized `{hours, minutes}` form every accounting
//! result is reported in. It is never negative.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Identifier of a worker (personnel record) on the HR API.
pub type WorkerId = u64;

/// A continuous span of activity within one day.
///
/// Either endpoint may be missing, e.g. a shift that has been assigned but
/// whose end time has not been filled in by an admin yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkInterval {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl WorkInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// An interval with a known start and no end yet.
    pub fn open(start: NaiveTime) -> Self {
        Self { start: Some(start), end: None }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// One worker's day on one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkRecord {
    /// Record id on the API, used for updates.
    pub id: u64,
    pub worker_id: WorkerId,
    /// Display name of the worker as returned with the record.
    pub worker_name: String,
    pub date: NaiveDate,
    pub regular: WorkInterval,
    pub overtime: Option<WorkInterval>,
    pub company_id: u64,
    pub job_id: u64,
}

/// Elapsed time normalized to whole hours and minutes in `[0, 59]`.
///
/// Deserialized values are normalized too, so `{"hours": 0, "minutes": 75}`
/// reads as `01:15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "DurationParts")]
pub struct WorkDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration { hours: 0, minutes: 0 };

    pub fn new(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(hours as i64 * 60 + minutes as i64)
    }

    /// Converts a raw minute count, flooring negative values to zero.
    pub fn from_minutes(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: (total / 60) as u32,
            minutes: (total % 60) as u32,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours as i64 * 60 + self.minutes as i64
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

#[derive(Deserialize)]
struct DurationParts {
    hours: u32,
    minutes: u32,
}

impl From<DurationParts> for WorkDuration {
    fn from(parts: DurationParts) -> Self {
        WorkDuration::new(parts.hours, parts.minutes)
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, rhs: WorkDuration) -> WorkDuration {
        WorkDuration::from_minutes(self.total_minutes() + rhs.total_minutes())
    }
}

impl Sum for WorkDuration {
    fn sum<I: Iterator<Item = WorkDuration>>(iter: I) -> Self {
        WorkDuration::from_minutes(iter.map(|d| d.total_minutes()).sum())
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Per-worker totals for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub worker_name: String,
    pub total_work: WorkDuration,
    pub total_overtime: WorkDuration,
    /// Number of daily records folded into the totals.
    pub days: u32,
}

impl MonthlySummary {
    pub fn grand_total(&self) -> WorkDuration {
        self.total_work + self.total_overtime
    }
}
