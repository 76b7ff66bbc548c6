use crate::{
    api::{HrClient, Session},
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?.api.unwrap_or_default();
    if HrClient::new(&config).delete_token()? {
        msg_success!(Message::LoggedOut);
    } else {
        msg_info!(Message::AlreadyLoggedOut);
    }
    Ok(())
}
