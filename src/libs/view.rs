use crate::api::dto::LeaveRequest;
use crate::libs::accounting::{daily_overtime_duration, daily_regular_duration};
use crate::libs::formatter::{format_duration, FormattedRecord};
use crate::libs::notification::Announcement;
use crate::libs::workday::{DailyWorkRecord, MonthlySummary, WorkDuration, WorkerId};
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    /// Daily records with a totals row. Totals are summed in minutes over
    /// the records, not from the formatted cells.
    pub fn records(records: &[DailyWorkRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "WORKER", "SHIFT", "OVERTIME SPAN", "REGULAR", "OVERTIME", "TOTAL"]);
        for record in records {
            let formatted = FormattedRecord::from(record);
            table.add_row(row![
                formatted.id,
                formatted.date,
                formatted.worker,
                formatted.shift,
                formatted.overtime_span,
                formatted.regular,
                formatted.overtime,
                formatted.total
            ]);
        }

        let regular: WorkDuration = records.iter().map(daily_regular_duration).sum();
        let overtime: WorkDuration = records.iter().map(daily_overtime_duration).sum();
        table.add_row(row![
            "",
            "",
            "TOTAL",
            "",
            "",
            format_duration(&regular),
            format_duration(&overtime),
            format_duration(&(regular + overtime))
        ]);
        table.printstd();

        Ok(())
    }

    pub fn summary(summaries: &BTreeMap<WorkerId, MonthlySummary>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WORKER", "DAYS", "WORK", "OVERTIME", "TOTAL"]);
        for summary in summaries.values() {
            table.add_row(row![
                summary.worker_name,
                summary.days,
                format_duration(&summary.total_work),
                format_duration(&summary.total_overtime),
                format_duration(&summary.grand_total())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn announcements(announcements: &[Announcement]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TITLE", "CONTENT"]);
        for announcement in announcements {
            table.add_row(row![announcement.id, announcement.date, announcement.title, announcement.content]);
        }
        table.printstd();

        Ok(())
    }

    pub fn leave_requests(requests: &[LeaveRequest]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TYPE", "FROM", "TO", "STATUS", "REASON"]);
        for request in requests {
            table.add_row(row![
                request.id,
                request.leave_type,
                request.start_date,
                request.end_date,
                request.status,
                request.reason.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
