//! HTTP transport for the CRUD gateway — maps routes to table operations.
//!
//! Requires the `gateway` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health` — health check returning `{ "ok": true }`.
//! - `GET /api/{artworks|books|journal}` — all rows, collection order.
//! - `POST /api/{artworks|books|journal}` — insert one row, returns it.
//! - `DELETE /api/{collection}/:id` — delete by id, returns
//!   `{ "success": true }` whether or not the row existed.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use atelier::gateway::{self, GatewayService};
//! use atelier::InMemoryCollectionStore;
//!
//! let service = Arc::new(GatewayService::new(InMemoryCollectionStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = gateway::http::router(service.clone());
//!
//! // Or serve directly
//! gateway::http::serve(service, "0.0.0.0:3001").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::content::{Artwork, Book, JournalPost};
use crate::persist::CollectionStore;

use super::{GatewayError, GatewayService};

/// Build an axum `Router` over the given gateway service.
pub fn router<S: CollectionStore + 'static>(service: Arc<GatewayService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/artworks",
            get(list_artworks).post(create_artwork),
        )
        .route("/api/artworks/:id", axum::routing::delete(delete_artwork))
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/:id", axum::routing::delete(delete_book))
        .route("/api/journal", get(list_journal).post(create_journal))
        .route("/api/journal/:id", axum::routing::delete(delete_journal))
        .with_state(service)
}

/// Serve the gateway over HTTP at the given address (e.g. `"0.0.0.0:3001"`).
pub async fn serve<S: CollectionStore + 'static>(
    service: Arc<GatewayService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr, "gateway listening");
    axum::serve(listener, app).await
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

fn reply<T: serde::Serialize>(result: Result<T, GatewayError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "gateway request failed");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

fn reply_deleted(result: Result<bool, GatewayError>) -> Response {
    // delete is idempotent — a missing row still reports success
    reply(result.map(|_| json!({ "success": true })))
}

async fn list_artworks<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
) -> Response {
    reply(service.list_artworks())
}

async fn create_artwork<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Json(artwork): Json<Artwork>,
) -> Response {
    reply(service.insert_artwork(artwork))
}

async fn delete_artwork<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Path(id): Path<String>,
) -> Response {
    reply_deleted(service.remove_artwork(&id))
}

async fn list_books<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
) -> Response {
    reply(service.list_books())
}

async fn create_book<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Json(book): Json<Book>,
) -> Response {
    reply(service.insert_book(book))
}

async fn delete_book<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Path(id): Path<String>,
) -> Response {
    reply_deleted(service.remove_book(&id))
}

async fn list_journal<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
) -> Response {
    reply(service.list_journal())
}

async fn create_journal<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Json(post): Json<JournalPost>,
) -> Response {
    reply(service.insert_journal(post))
}

async fn delete_journal<S: CollectionStore>(
    State(service): State<Arc<GatewayService<S>>>,
    Path(id): Path<String>,
) -> Response {
    reply_deleted(service.remove_journal(&id))
}
