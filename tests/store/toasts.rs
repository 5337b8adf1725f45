//! Notification expiry under the real background sweeper.

use std::time::{Duration, Instant};

use atelier::{InMemoryCollectionStore, Severity, Store};

#[test]
fn sweeper_drops_toasts_after_ttl() {
    let store = Store::new(InMemoryCollectionStore::new())
        .with_notification_ttl(Duration::from_millis(50));
    let sweeper = store.spawn_notification_sweeper(Duration::from_millis(10));

    store.notify("first", Severity::Info);
    store.notify("first", Severity::Info);
    assert_eq!(store.notifications().len(), 2);

    let deadline = Instant::now() + Duration::from_secs(2);
    while !store.notifications().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }

    assert!(store.notifications().is_empty());
    assert_eq!(sweeper.stop(), 2);
}

#[test]
fn dismissed_toast_is_not_double_counted() {
    let store = Store::new(InMemoryCollectionStore::new())
        .with_notification_ttl(Duration::from_millis(50));

    let id = store.notify("dismiss me", Severity::Success);
    store.remove_notification(&id);
    assert!(store.notifications().is_empty());

    let sweeper = store.spawn_notification_sweeper(Duration::from_millis(10));
    std::thread::sleep(Duration::from_millis(120));
    assert_eq!(sweeper.stop(), 0);
}
