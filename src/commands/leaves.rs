use crate::{
    commands::{api_failure, client},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let client = client()?;
    let requests = client.leave_requests().await.map_err(|e| api_failure(&client, e))?;

    if requests.is_empty() {
        msg_info!(Message::NoLeaveRequests);
        return Ok(());
    }

    msg_print!(Message::LeaveRequestsHeader, true);
    View::leave_requests(&requests)?;

    Ok(())
}
