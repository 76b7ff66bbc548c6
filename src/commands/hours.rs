use crate::{
    api::dto::UpdateHours,
    commands::{api_failure, client, ensure_ordered, parse_time_arg},
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Id of the daily record
    id: u64,
    /// Shift start (HH:MM)
    #[arg(long, value_parser = parse_time_arg)]
    start: NaiveTime,
    /// Shift end (HH:MM)
    #[arg(long, value_parser = parse_time_arg)]
    end: NaiveTime,
    /// Overtime start (HH:MM)
    #[arg(long, value_parser = parse_time_arg, requires = "overtime_end")]
    overtime_start: Option<NaiveTime>,
    /// Overtime end (HH:MM)
    #[arg(long, value_parser = parse_time_arg, requires = "overtime_start")]
    overtime_end: Option<NaiveTime>,
}

pub async fn cmd(hours_args: HoursArgs) -> Result<()> {
    ensure_ordered(hours_args.start, hours_args.end)?;
    let mut hours = UpdateHours::new(hours_args.start, hours_args.end);
    if let (Some(start), Some(end)) = (hours_args.overtime_start, hours_args.overtime_end) {
        ensure_ordered(start, end)?;
        hours = hours.with_overtime(start, end);
    }

    let client = client()?;
    let record = client
        .update_hours(hours_args.id, &hours)
        .await
        .map_err(|e| api_failure(&client, e))?;

    msg_success!(Message::HoursUpdated(record.id));
    View::records(&[record])?;

    Ok(())
}
