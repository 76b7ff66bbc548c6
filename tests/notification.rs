#[cfg(test)]
mod tests {
    use anyhow::Result;
    use hrdash::libs::config::PushConfig;
    use hrdash::libs::feed::Feed;
    use hrdash::libs::notification::{Category, NotificationService, PushEvent, Topics, SEEN_CAPACITY};
    use hrdash::libs::transport::{Listener, LocalTransport, Topic, Transport, TransportId};
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::Arc;
    use test_context::{test_context, TestContext};

    struct NotificationTestContext {
        transport: Arc<LocalTransport>,
        service: NotificationService,
        announcements: Topic,
        leave_status: Topic,
    }

    impl TestContext for NotificationTestContext {
        fn setup() -> Self {
            let config = PushConfig {
                user_id: 42,
                ..PushConfig::default()
            };
            let topics = Topics::from_config(&config);
            let transport = Arc::new(LocalTransport::new());
            let service = NotificationService::new(transport.clone(), topics.clone());
            NotificationTestContext {
                transport,
                service,
                announcements: topics.get(Category::Announcement).clone(),
                leave_status: topics.get(Category::LeaveStatus).clone(),
            }
        }
    }

    fn announcement(id: u64) -> Value {
        json!({ "id": id, "title": format!("Title {}", id), "content": "Body", "date": "2025-05-01" })
    }

    fn announcement_ids(events: &[PushEvent]) -> Vec<u64> {
        events
            .iter()
            .map(|event| match event {
                PushEvent::Announcement(a) => a.id,
                PushEvent::LeaveStatus(l) => l.id,
            })
            .collect()
    }

    /// A transport that never stops delivering to old listeners.
    #[derive(Default)]
    struct LeakyTransport {
        next_id: AtomicU64,
        listeners: Mutex<Vec<Listener>>,
    }

    impl LeakyTransport {
        fn publish(&self, payload: Value) {
            let listeners = self.listeners.lock().clone();
            for listener in listeners {
                listener(payload.clone());
            }
        }
    }

    impl Transport for LeakyTransport {
        fn subscribe(&self, _topic: &Topic, listener: Listener) -> Result<TransportId> {
            self.listeners.lock().push(listener);
            Ok(TransportId(self.next_id.fetch_add(1, Ordering::Relaxed)))
        }

        fn unsubscribe(&self, _id: TransportId) {}
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_drain_returns_events_in_receipt_order(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();

        for id in [1, 2, 3] {
            ctx.transport.publish(&ctx.announcements, announcement(id));
        }
        assert_eq!(ctx.service.pending(Category::Announcement), 3);

        let drained = ctx.service.on_view_opened(Category::Announcement);
        assert_eq!(announcement_ids(&drained), vec![1, 2, 3]);
        assert_eq!(ctx.service.pending(Category::Announcement), 0);

        ctx.transport.publish(&ctx.announcements, announcement(4));
        assert_eq!(announcement_ids(&ctx.service.drain(Category::Announcement)), vec![4]);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_view_opened_is_idempotent(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(1));

        assert_eq!(ctx.service.on_view_opened(Category::Announcement).len(), 1);
        assert!(ctx.service.on_view_opened(Category::Announcement).is_empty());
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_resubscribe_does_not_duplicate(ctx: &mut NotificationTestContext) {
        let first = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(1));

        let second = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        assert!(!first.is_active());
        assert!(second.is_active());
        assert_eq!(ctx.transport.listener_count(&ctx.announcements), 1);

        ctx.transport.publish(&ctx.announcements, announcement(2));

        // The stale handle going away must not tear down the live one
        drop(first);
        assert!(second.is_active());
        ctx.transport.publish(&ctx.announcements, announcement(3));

        let drained = ctx.service.drain(Category::Announcement);
        assert_eq!(announcement_ids(&drained), vec![1, 2, 3]);
    }

    #[test]
    fn test_resubscribe_on_leaky_transport_does_not_duplicate() {
        let transport = Arc::new(LeakyTransport::default());
        let service = NotificationService::new(transport.clone(), Topics::from_config(&PushConfig::default()));

        let _first = service.subscribe(Category::Announcement, |_| {}).unwrap();
        let _second = service.subscribe(Category::Announcement, |_| {}).unwrap();
        assert_eq!(transport.listeners.lock().len(), 2);

        transport.publish(announcement(1));
        transport.publish(announcement(1));
        transport.publish(announcement(2));

        assert_eq!(announcement_ids(&service.drain(Category::Announcement)), vec![1, 2]);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_duplicate_event_is_buffered_once(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(7));
        ctx.service.drain(Category::Announcement);

        // Redelivery after a drain is still the same event instance
        ctx.transport.publish(&ctx.announcements, announcement(7));
        assert_eq!(ctx.service.pending(Category::Announcement), 0);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_callback_runs_for_buffered_events(ctx: &mut NotificationTestContext) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _subscription = ctx
            .service
            .subscribe(Category::Announcement, move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        ctx.transport.publish(&ctx.announcements, announcement(1));
        ctx.transport.publish(&ctx.announcements, announcement(1));
        ctx.transport.publish(&ctx.announcements, json!({ "unexpected": true }));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_malformed_payload_dropped(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, json!("not an object"));
        ctx.transport.publish(&ctx.announcements, json!({ "id": 1 }));
        assert_eq!(ctx.service.pending(Category::Announcement), 0);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_dropping_subscription_discards_buffer(ctx: &mut NotificationTestContext) {
        let subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(1));
        assert_eq!(ctx.service.pending(Category::Announcement), 1);

        ctx.service.unsubscribe(subscription);
        assert!(!ctx.service.is_subscribed(Category::Announcement));
        assert_eq!(ctx.transport.listener_count(&ctx.announcements), 0);
        assert_eq!(ctx.service.pending(Category::Announcement), 0);

        // Not delivered anywhere once torn down
        assert_eq!(ctx.transport.publish(&ctx.announcements, announcement(2)), 0);

        // A new session starts empty and accepts the old ids again
        let _again = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(1));
        assert_eq!(announcement_ids(&ctx.service.drain(Category::Announcement)), vec![1]);
    }

    #[test]
    fn test_dropping_service_before_subscription_unsubscribes() {
        let transport = Arc::new(LocalTransport::new());
        let topics = Topics::from_config(&PushConfig::default());
        let topic = topics.get(Category::Announcement).clone();
        let service = NotificationService::new(transport.clone(), topics);
        let subscription = service.subscribe(Category::Announcement, |_| {}).unwrap();
        assert_eq!(transport.listener_count(&topic), 1);

        drop(service);
        assert_eq!(transport.listener_count(&topic), 0);
        assert!(!subscription.is_active());

        drop(subscription);
        assert_eq!(transport.listener_count(&topic), 0);
        assert_eq!(transport.publish(&topic, announcement(1)), 0);
    }

    #[test]
    fn test_clone_keeps_subscriptions_alive() {
        let transport = Arc::new(LocalTransport::new());
        let topics = Topics::from_config(&PushConfig::default());
        let topic = topics.get(Category::Announcement).clone();
        let service = NotificationService::new(transport.clone(), topics);
        let _subscription = service.subscribe(Category::Announcement, |_| {}).unwrap();

        let handle = service.clone();
        drop(service);
        transport.publish(&topic, announcement(1));
        assert_eq!(handle.pending(Category::Announcement), 1);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_seen_set_is_bounded(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();

        for id in 0..SEEN_CAPACITY as u64 {
            ctx.transport.publish(&ctx.announcements, announcement(id));
        }
        ctx.service.drain(Category::Announcement);

        // Still remembered
        ctx.transport.publish(&ctx.announcements, announcement(0));
        assert_eq!(ctx.service.pending(Category::Announcement), 0);

        // One more identity evicts the oldest
        ctx.transport.publish(&ctx.announcements, announcement(SEEN_CAPACITY as u64));
        ctx.transport.publish(&ctx.announcements, announcement(0));
        assert_eq!(
            announcement_ids(&ctx.service.drain(Category::Announcement)),
            vec![SEEN_CAPACITY as u64, 0]
        );
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_categories_are_independent(ctx: &mut NotificationTestContext) {
        let _announcements = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        let _leaves = ctx.service.subscribe(Category::LeaveStatus, |_| {}).unwrap();

        ctx.transport.publish(&ctx.announcements, announcement(1));
        ctx.transport.publish(&ctx.leave_status, json!({ "id": 9, "status": "approved" }));

        assert_eq!(ctx.service.pending(Category::Announcement), 1);
        assert_eq!(ctx.service.pending(Category::LeaveStatus), 1);

        ctx.service.drain(Category::Announcement);
        assert_eq!(ctx.service.pending(Category::LeaveStatus), 1);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_leave_status_identity_includes_status(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::LeaveStatus, |_| {}).unwrap();

        ctx.transport.publish(&ctx.leave_status, json!({ "id": 9, "status": "pending" }));
        ctx.transport.publish(&ctx.leave_status, json!({ "id": 9, "status": "pending" }));
        ctx.transport.publish(
            &ctx.leave_status,
            json!({ "id": 9, "status": "approved", "message": "Enjoy", "approver": "HR" }),
        );

        let drained = ctx.service.drain(Category::LeaveStatus);
        assert_eq!(drained.len(), 2);
        match &drained[1] {
            PushEvent::LeaveStatus(update) => {
                assert_eq!(update.status, "approved");
                assert_eq!(update.message.as_deref(), Some("Enjoy"));
                assert_eq!(update.extra.get("approver"), Some(&json!("HR")));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_leave_status_topic_is_per_user(ctx: &mut NotificationTestContext) {
        assert_eq!(ctx.leave_status.channel, "leave-status.42");
        assert_eq!(ctx.leave_status.event, "leave-status-updated");
        assert_eq!(ctx.announcements.to_string(), "announcements:announcement");
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_shutdown_tears_down_everything(ctx: &mut NotificationTestContext) {
        let announcements = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        let _leaves = ctx.service.subscribe(Category::LeaveStatus, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(1));

        ctx.service.shutdown();

        assert!(!announcements.is_active());
        for category in Category::ALL {
            assert!(!ctx.service.is_subscribed(category));
            assert_eq!(ctx.service.pending(category), 0);
        }
        assert_eq!(ctx.transport.listener_count(&ctx.announcements), 0);
        assert_eq!(ctx.transport.listener_count(&ctx.leave_status), 0);
    }

    #[test_context(NotificationTestContext)]
    #[test]
    fn test_drained_events_merge_into_feed(ctx: &mut NotificationTestContext) {
        let _subscription = ctx.service.subscribe(Category::Announcement, |_| {}).unwrap();
        ctx.transport.publish(&ctx.announcements, announcement(2));
        ctx.transport.publish(&ctx.announcements, announcement(3));

        let mut feed: Feed<PushEvent> = Feed::new();
        feed.load_history(vec![
            PushEvent::from_payload(Category::Announcement, announcement(2)).unwrap(),
            PushEvent::from_payload(Category::Announcement, announcement(1)).unwrap(),
        ]);

        let added = feed.push_all_live(ctx.service.drain(Category::Announcement));
        assert_eq!(added, 1);
        assert_eq!(announcement_ids(feed.items()), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_events_published_from_another_task() {
        let transport = Arc::new(LocalTransport::new());
        let topics = Topics::from_config(&PushConfig::default());
        let topic = topics.get(Category::Announcement).clone();
        let service = NotificationService::new(transport.clone(), topics);
        let _subscription = service.subscribe(Category::Announcement, |_| {}).unwrap();

        let publisher = transport.clone();
        tokio::spawn(async move {
            for id in 1..=5 {
                publisher.publish(&topic, announcement(id));
            }
        })
        .await
        .unwrap();

        assert_eq!(announcement_ids(&service.drain(Category::Announcement)), vec![1, 2, 3, 4, 5]);
    }
}
