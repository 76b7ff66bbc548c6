use crate::{
    api::dto::NewAssignment,
    commands::{api_failure, client, parse_time_arg},
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AssignArgs {
    /// Personnel (worker) id
    #[arg(long)]
    personnel: u64,
    /// Company id
    #[arg(long)]
    company: u64,
    /// Job id within the company
    #[arg(long)]
    job: u64,
    /// Day of the assignment (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Shift start (HH:MM)
    #[arg(long, value_parser = parse_time_arg)]
    start: NaiveTime,
}

pub async fn cmd(assign_args: AssignArgs) -> Result<()> {
    let assignment = NewAssignment {
        personnel_id: assign_args.personnel,
        company_id: assign_args.company,
        job_id: assign_args.job,
        date: assign_args.date.unwrap_or_else(|| Local::now().date_naive()),
        job_start_time: assign_args.start,
    };

    let client = client()?;
    let record = client
        .create_record(&assignment)
        .await
        .map_err(|e| api_failure(&client, e))?;

    msg_success!(Message::AssignmentCreated(record.id));
    View::records(&[record])?;

    Ok(())
}
