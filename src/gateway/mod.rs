//! The CRUD gateway — one collection, one table, no core logic.
//!
//! The gateway maps each content collection to insert/select/delete over
//! HTTP with JSON bodies. List endpoints return all rows in a
//! collection-specific order (artworks by year, books by creation, journal
//! by date); there is no pagination and no filtering.
//!
//! [`GatewayService`] holds the table logic, `gateway::http` (behind the
//! `gateway` feature) exposes it as an axum router, and [`GatewayClient`]
//! is the caller side used for startup hydration and best-effort mirroring.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use atelier::gateway::{self, GatewayService};
//! use atelier::FileCollectionStore;
//!
//! let service = Arc::new(GatewayService::new(FileCollectionStore::open("./data")?));
//! gateway::http::serve(service, "0.0.0.0:3001").await?;
//! ```

mod client;
mod service;

#[cfg(feature = "gateway")]
pub mod http;

use std::fmt;

use crate::persist::PersistError;

pub use client::GatewayClient;
pub use service::GatewayService;

/// Error type for gateway operations, on either side of the wire.
#[derive(Debug)]
pub enum GatewayError {
    /// Network-level failure — the gateway was unreachable.
    Transport(String),
    /// The gateway answered with a non-OK status.
    BadStatus(u16),
    /// Row (de)serialization failed.
    Serde(String),
    /// Backing storage failed.
    Storage(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "gateway unreachable: {}", msg),
            GatewayError::BadStatus(status) => {
                write!(f, "gateway answered with status {}", status)
            }
            GatewayError::Serde(msg) => write!(f, "gateway serialization error: {}", msg),
            GatewayError::Storage(msg) => write!(f, "gateway storage error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<PersistError> for GatewayError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::Storage(msg) => GatewayError::Storage(msg),
            PersistError::Serde(msg) => GatewayError::Serde(msg),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

impl GatewayError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Transport(_) => 502,
            GatewayError::BadStatus(status) => *status,
            GatewayError::Serde(_) => 500,
            GatewayError::Storage(_) => 500,
        }
    }
}
