//! Formatting utilities for durations and daily records.
//!
//! Every duration shown to the user goes through this module so tables and
//! messages agree on one representation:
//!
//! - `HH:MM` for table cells ([`format_duration`])
//! - `8h 15m` for prose ([`format_hours_minutes`])
//!
//! Times of day are shown as `HH:MM`, missing ones as `--:--`.
//!
//! ## Examples
//!
//! ```rust
//! use hrdash::libs::formatter::{format_duration, format_hours_minutes};
//! use hrdash::libs::workday::WorkDuration;
//!
//! let duration = WorkDuration::new(7, 45) + WorkDuration::new(0, 30);
//! assert_eq!(format_duration(&duration), "08:15");
//! assert_eq!(format_hours_minutes(&duration), "8h 15m");
//! ```

use crate::libs::accounting::{daily_overtime_duration, daily_regular_duration, daily_total_duration};
use crate::libs::workday::{DailyWorkRecord, WorkDuration};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Placeholder for a time of day that has not been recorded.
pub const MISSING_TIME: &str = "--:--";

/// A daily record rendered to strings for tables and exports.
///
/// Values are pre-formatted so the table code never repeats duration math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
    pub id: u64,
    pub date: String,
    pub worker: String,
    /// Regular shift as `HH:MM - HH:MM`.
    pub shift: String,
    /// Overtime span as `HH:MM - HH:MM`, or `-` when there is none.
    pub overtime_span: String,
    pub regular: String,
    pub overtime: String,
    pub total: String,
}

impl From<&DailyWorkRecord> for FormattedRecord {
    fn from(record: &DailyWorkRecord) -> Self {
        Self {
            id: record.id,
            date: record.date.format("%Y-%m-%d").to_string(),
            worker: record.worker_name.clone(),
            shift: format_span(record.regular.start, record.regular.end),
            overtime_span: record
                .overtime
                .map_or_else(|| "-".to_string(), |ot| format_span(ot.start, ot.end)),
            regular: format_duration(&daily_regular_duration(record)),
            overtime: format_duration(&daily_overtime_duration(record)),
            total: format_duration(&daily_total_duration(record)),
        }
    }
}

/// Formats a duration as zero-padded `HH:MM`.
///
/// Hours are not capped at 24, monthly totals routinely exceed it.
pub fn format_duration(duration: &WorkDuration) -> String {
    duration.to_string()
}

/// Formats a duration as `Xh Ym`.
pub fn format_hours_minutes(duration: &WorkDuration) -> String {
    format!("{}h {}m", duration.hours, duration.minutes)
}

pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| MISSING_TIME.to_string(), |t| t.format("%H:%M").to_string())
}

pub fn format_span(start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}
