//! HTTP transport tests — raw reqwest against a running gateway.

use atelier::gateway::GatewayClient;
use atelier::{Artwork, JournalPost};
use chrono::NaiveDate;
use serde_json::json;

use crate::support;

#[tokio::test]
async fn health_check() {
    let base = support::start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn artwork_crud_round_trip() {
    let base = support::start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/artworks"))
        .json(&support::artwork("a1", "The Mirror", 2024))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let listed: Vec<Artwork> = client
        .get(format!("{base}/api/artworks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "a1");
    assert_eq!(listed[0].title.default_text(), "The Mirror");

    let resp = client
        .delete(format!("{base}/api/artworks/a1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let listed: Vec<Artwork> = client
        .get(format!("{base}/api/artworks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn delete_missing_row_still_succeeds() {
    let base = support::start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/api/books/never-existed"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn artworks_listed_by_year_desc() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);

    client.push(&support::artwork("a1", "old", 2019)).await.unwrap();
    client.push(&support::artwork("a2", "new", 2025)).await.unwrap();
    client.push(&support::artwork("a3", "mid", 2022)).await.unwrap();

    let years: Vec<i32> = client
        .fetch_artworks()
        .await
        .unwrap()
        .iter()
        .map(|a| a.year)
        .collect();
    assert_eq!(years, vec![2025, 2022, 2019]);
}

#[tokio::test]
async fn journal_listed_by_date_desc() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);
    let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();

    client.push(&support::post("j1", "first", d(2))).await.unwrap();
    client.push(&support::post("j2", "latest", d(20))).await.unwrap();

    let posts: Vec<JournalPost> = client.fetch_journal().await.unwrap();
    assert_eq!(posts[0].id, "j2");
    assert_eq!(posts[1].id, "j1");
}

#[tokio::test]
async fn insert_assigns_id_when_client_sent_none() {
    let base = support::start_gateway().await;
    let client = GatewayClient::new(&base);

    let saved = client.push(&support::book("", "Essays")).await.unwrap();
    assert!(!saved.id.is_empty());

    let books = client.fetch_books().await.unwrap();
    assert_eq!(books[0].id, saved.id);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let base = support::start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/books"))
        .header("content-type", "application/json")
        .body(r#"{"title": 42}"#)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn unknown_collection_is_404() {
    let base = support::start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/paintings"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
