#[cfg(test)]
mod tests {
    use hrdash::libs::feed::Feed;
    use hrdash::libs::notification::Announcement;

    fn announcement(id: u64, title: &str) -> Announcement {
        Announcement {
            id,
            title: title.to_string(),
            content: format!("{} content", title),
            date: "2025-05-01".to_string(),
        }
    }

    fn ids(feed: &Feed<Announcement>) -> Vec<u64> {
        feed.items().iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_load_history_keeps_order() {
        let mut feed = Feed::new();
        feed.load_history(vec![announcement(3, "c"), announcement(2, "b"), announcement(1, "a")]);
        assert_eq!(ids(&feed), vec![3, 2, 1]);
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_push_live_prepends() {
        let mut feed = Feed::new();
        feed.load_history(vec![announcement(1, "a")]);
        assert!(feed.push_live(announcement(2, "b")));
        assert_eq!(ids(&feed), vec![2, 1]);
    }

    #[test]
    fn test_push_live_duplicate_ignored() {
        let mut feed = Feed::new();
        feed.load_history(vec![announcement(1, "a")]);
        assert!(!feed.push_live(announcement(1, "a again")));
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.items()[0].title, "a");
    }

    #[test]
    fn test_history_after_push_replaces_in_place() {
        // Push and fetch race: the pushed item arrives first
        let mut feed = Feed::new();
        feed.push_live(announcement(5, "pushed"));
        feed.load_history(vec![announcement(5, "fetched"), announcement(4, "older")]);

        assert_eq!(ids(&feed), vec![5, 4]);
        assert_eq!(feed.items()[0].title, "fetched");
    }

    #[test]
    fn test_push_all_live_counts_new_items() {
        let mut feed = Feed::new();
        feed.load_history(vec![announcement(1, "a")]);
        let added = feed.push_all_live(vec![announcement(2, "b"), announcement(1, "a"), announcement(3, "c")]);
        assert_eq!(added, 2);
        assert_eq!(ids(&feed), vec![3, 2, 1]);
    }

    #[test]
    fn test_empty_feed() {
        let feed: Feed<Announcement> = Feed::new();
        assert!(feed.is_empty());
        assert!(feed.items().is_empty());
    }
}
