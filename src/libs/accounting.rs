//! Work-interval accounting.
//!
//! Converts start/end time-of-day pairs into [`WorkDuration`]s and folds daily
//! records into per-worker monthly totals.
//!
//! ## Rules
//!
//! - A missing endpoint yields a zero duration for that interval.
//! - An end before its start is clamped to zero, never negative.
//! - A regular shift that starts before 13:00 and ends after 12:00 contains
//!   one unpaid lunch hour: 60 minutes are subtracted, floored at zero.
//! - Overtime never gets the lunch deduction.
//!
//! Times of day count in whole minutes; seconds are ignored.
//!
//! All arithmetic is done in raw minutes; conversion to hours/minutes only
//! happens when a result leaves this module. Monthly totals are accumulated
//! in minutes across every record before being normalized.
//!
//! ```rust
//! use chrono::NaiveTime;
//! use hrdash::libs::accounting::elapsed;
//! use hrdash::libs::workday::WorkDuration;
//!
//! let start = NaiveTime::from_hms_opt(9, 0, 0);
//! let end = NaiveTime::from_hms_opt(11, 30, 0);
//! assert_eq!(elapsed(start, end), WorkDuration::new(2, 30));
//! ```

use crate::libs::workday::{DailyWorkRecord, MonthlySummary, WorkDuration, WorkInterval, WorkerId};
use chrono::{Datelike, NaiveTime, Timelike};
use std::collections::BTreeMap;

/// Unpaid lunch break contained in any shift crossing midday.
pub const LUNCH_DEDUCTION_MINUTES: i64 = 60;

/// Lunch window bounds, minutes from midnight.
const NOON: i64 = 12 * 60;
const ONE_PM: i64 = 13 * 60;

fn minute_of_day(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

fn elapsed_minutes(start: Option<NaiveTime>, end: Option<NaiveTime>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (minute_of_day(end) - minute_of_day(start)).max(0),
        _ => 0,
    }
}

fn spans_midday(interval: &WorkInterval) -> bool {
    match (interval.start, interval.end) {
        (Some(start), Some(end)) => minute_of_day(start) < ONE_PM && minute_of_day(end) > NOON,
        _ => false,
    }
}

fn regular_minutes(record: &DailyWorkRecord) -> i64 {
    let raw = elapsed_minutes(record.regular.start, record.regular.end);
    if spans_midday(&record.regular) {
        (raw - LUNCH_DEDUCTION_MINUTES).max(0)
    } else {
        raw
    }
}

fn overtime_minutes(record: &DailyWorkRecord) -> i64 {
    record.overtime.map_or(0, |ot| elapsed_minutes(ot.start, ot.end))
}

/// Time between `start` and `end`, zero if either is missing or `end < start`.
pub fn elapsed(start: Option<NaiveTime>, end: Option<NaiveTime>) -> WorkDuration {
    WorkDuration::from_minutes(elapsed_minutes(start, end))
}

/// Regular shift duration with the lunch deduction applied.
pub fn daily_regular_duration(record: &DailyWorkRecord) -> WorkDuration {
    WorkDuration::from_minutes(regular_minutes(record))
}

/// Overtime duration, zero when the record has no overtime.
pub fn daily_overtime_duration(record: &DailyWorkRecord) -> WorkDuration {
    WorkDuration::from_minutes(overtime_minutes(record))
}

/// Regular plus overtime for one record.
pub fn daily_total_duration(record: &DailyWorkRecord) -> WorkDuration {
    WorkDuration::from_minutes(regular_minutes(record) + overtime_minutes(record))
}

/// Groups records by worker and totals regular and overtime work.
///
/// The worker name comes from the first record seen for that worker.
pub fn summarize(records: &[DailyWorkRecord]) -> BTreeMap<WorkerId, MonthlySummary> {
    struct Acc {
        name: String,
        work: i64,
        overtime: i64,
        days: u32,
    }

    let mut totals: BTreeMap<WorkerId, Acc> = BTreeMap::new();
    for record in records {
        let acc = totals.entry(record.worker_id).or_insert_with(|| Acc {
            name: record.worker_name.clone(),
            work: 0,
            overtime: 0,
            days: 0,
        });
        acc.work += regular_minutes(record);
        acc.overtime += overtime_minutes(record);
        acc.days += 1;
    }

    tracing::debug!(records = records.len(), workers = totals.len(), "summarized daily records");

    totals
        .into_iter()
        .map(|(worker_id, acc)| {
            (
                worker_id,
                MonthlySummary {
                    worker_name: acc.name,
                    total_work: WorkDuration::from_minutes(acc.work),
                    total_overtime: WorkDuration::from_minutes(acc.overtime),
                    days: acc.days,
                },
            )
        })
        .collect()
}

/// Keeps only the records dated in the given month of the given year.
pub fn records_in_month(records: &[DailyWorkRecord], month: u32, year: i32) -> Vec<DailyWorkRecord> {
    records
        .iter()
        .filter(|r| r.date.month() == month && r.date.year() == year)
        .cloned()
        .collect()
}
