//! Caller side of the CRUD gateway.

use serde::de::DeserializeOwned;

use crate::content::{Artwork, Book, JournalPost, Record};

use super::GatewayError;

/// HTTP client for the gateway's per-collection endpoints.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for a gateway at the given base URL
    /// (e.g. `"http://localhost:3001"`).
    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), collection)
    }

    pub async fn fetch_artworks(&self) -> Result<Vec<Artwork>, GatewayError> {
        self.fetch().await
    }

    pub async fn fetch_books(&self) -> Result<Vec<Book>, GatewayError> {
        self.fetch().await
    }

    pub async fn fetch_journal(&self) -> Result<Vec<JournalPost>, GatewayError> {
        self.fetch().await
    }

    /// Insert a record, returning the row as the gateway saved it (the id
    /// may differ when the gateway assigned one).
    pub async fn push<T: Record>(&self, record: &T) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(self.url(T::COLLECTION))
            .json(record)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a record by id. The gateway treats unknown ids as success.
    pub async fn delete<T: Record>(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(format!("{}/{}", self.url(T::COLLECTION), id))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }
        Ok(())
    }

    async fn fetch<T: Record>(&self) -> Result<Vec<T>, GatewayError> {
        let response = self.client.get(self.url(T::COLLECTION)).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Serde(e.to_string()))
    }
}
