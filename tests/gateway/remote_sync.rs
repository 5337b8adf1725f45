//! Startup hydration and best-effort mirroring against a live gateway.

use std::time::{Duration, Instant};

use atelier::gateway::GatewayClient;
use atelier::sync::{hydrate_from_gateway, Mirror};
use atelier::{InMemoryCollectionStore, Store};

use crate::support;

#[tokio::test]
async fn hydrate_replaces_non_empty_collections_only() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);

    // remote has artworks, no books
    client.push(&support::artwork("a1", "remote", 2024)).await.unwrap();

    let store = Store::new(InMemoryCollectionStore::new());
    store.add_artwork(support::artwork("local-a", "local", 2020)).unwrap();
    store.add_book(support::book("local-b", "local book")).unwrap();

    let connected = hydrate_from_gateway(&store, &client).await.unwrap();
    assert!(connected);

    // artworks came from the gateway, the empty remote books left local state alone
    let artworks = store.artworks();
    assert_eq!(artworks.len(), 1);
    assert_eq!(artworks[0].id, "a1");
    assert_eq!(store.books().len(), 1);

    assert_eq!(store.log()[0].action, "Connected to content database");
}

#[tokio::test]
async fn unreachable_gateway_means_offline_mode() {
    // nothing listens here
    let client = GatewayClient::new("http://127.0.0.1:1");

    let store = Store::new(InMemoryCollectionStore::new());
    store.add_artwork(support::artwork("a1", "kept", 2024)).unwrap();

    let connected = hydrate_from_gateway(&store, &client).await.unwrap();
    assert!(!connected);
    assert_eq!(store.artworks().len(), 1);
    assert_eq!(store.log()[0].action, "Running in offline mode");
}

#[tokio::test]
async fn mirror_push_lands_in_gateway() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);
    let mirror = Mirror::new(client.clone());

    mirror.spawn_push(support::artwork("a1", "mirrored", 2024));

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let artworks = client.fetch_artworks().await.unwrap();
        if !artworks.is_empty() {
            assert_eq!(artworks[0].id, "a1");
            break;
        }
        assert!(Instant::now() < deadline, "mirror push never arrived");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn mirror_delete_removes_remote_row() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);
    client.push(&support::artwork("a1", "doomed", 2024)).await.unwrap();

    let mirror = Mirror::new(client.clone());
    mirror.spawn_delete::<atelier::Artwork>("a1");

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if client.fetch_artworks().await.unwrap().is_empty() {
            break;
        }
        assert!(Instant::now() < deadline, "mirror delete never arrived");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
