use crate::{
    commands::{api_failure, client},
    libs::{
        accounting::{records_in_month, summarize},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Month (1-12), defaults to the current month
    #[arg(long)]
    month: Option<u32>,
    /// Year, defaults to the current year
    #[arg(long)]
    year: Option<i32>,
}

pub async fn cmd(sum_args: SumArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let month = sum_args.month.unwrap_or_else(|| today.month());
    let year = sum_args.year.unwrap_or_else(|| today.year());
    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        msg_bail_anyhow!(Message::InvalidMonth(month));
    };
    let period = first_day.format("%B, %Y").to_string();

    let client = client()?;
    let records = client.monthly_report(month, year).await.map_err(|e| api_failure(&client, e))?;
    let records = records_in_month(&records, month, year);

    if records.is_empty() {
        msg_info!(Message::NoSummaryData(period));
        return Ok(());
    }

    msg_print!(Message::MonthlySummaryHeader(period), true);
    View::summary(&summarize(&records))?;

    Ok(())
}
