use crate::{
    commands::{api_failure, client},
    libs::{messages::Message, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// Single day (YYYY-MM-DD), defaults to today
    #[arg(long, conflicts_with_all = ["from", "to"])]
    date: Option<NaiveDate>,
    /// Start of a date range (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,
    /// End of a date range (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

impl RecordsArgs {
    fn range(&self) -> (NaiveDate, NaiveDate) {
        match (self.from, self.to) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                let day = self.date.unwrap_or_else(|| Local::now().date_naive());
                (day, day)
            }
        }
    }
}

pub async fn cmd(records_args: RecordsArgs) -> Result<()> {
    let (from, to) = records_args.range();
    if from > to {
        msg_bail_anyhow!(Message::InvalidDateRange {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    let period = if from == to { from.to_string() } else { format!("{} - {}", from, to) };

    let client = client()?;
    let records = client.daily_records(from, to).await.map_err(|e| api_failure(&client, e))?;

    if records.is_empty() {
        msg_info!(Message::NoRecordsFound(period));
        return Ok(());
    }

    msg_print!(Message::RecordsHeader(period), true);
    View::records(&records)?;

    Ok(())
}
