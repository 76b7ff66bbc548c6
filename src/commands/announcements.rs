use crate::{
    commands::{api_failure, client},
    libs::{feed::Feed, messages::Message, notification::Announcement, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let client = client()?;
    let history = client.announcements().await.map_err(|e| api_failure(&client, e))?;

    let mut feed: Feed<Announcement> = Feed::new();
    feed.load_history(history);

    if feed.is_empty() {
        msg_info!(Message::NoAnnouncements);
        return Ok(());
    }

    msg_print!(Message::AnnouncementsHeader, true);
    View::announcements(feed.items())?;

    Ok(())
}
