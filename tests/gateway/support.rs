//! Shared fixtures: a running gateway server and record builders.

use std::sync::Arc;

use atelier::gateway::{self, GatewayService};
use atelier::{Artwork, Book, Category, InMemoryCollectionStore, JournalPost, LocalizedText};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

/// Bind the gateway to port 0 and return its base URL.
pub async fn start_gateway() -> String {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let service = Arc::new(GatewayService::new(InMemoryCollectionStore::new()));
    let app = gateway::http::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn artwork(id: &str, title: &str, year: i32) -> Artwork {
    Artwork {
        id: id.into(),
        title: LocalizedText::new(title),
        description: LocalizedText::new("desc"),
        technique: None,
        year,
        category: Category::Painting,
        image_url: "img".into(),
        featured: false,
        dimensions: None,
    }
}

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.into(),
        title: LocalizedText::new(title),
        subtitle: None,
        description: LocalizedText::new("desc"),
        price: Decimal::new(1999, 2),
        cover_url: "cover".into(),
        pages: 120,
        publish_date: Utc::now(),
    }
}

pub fn post(id: &str, title: &str, date: NaiveDate) -> JournalPost {
    JournalPost {
        id: id.into(),
        title: LocalizedText::new(title),
        excerpt: LocalizedText::new("ex"),
        content: LocalizedText::new("body"),
        date,
        tags: vec!["essay".into()],
    }
}
