//! Remote synchronization — startup hydration and best-effort mirroring.
//!
//! The local [`CollectionStore`] is authoritative. The remote gateway is a
//! mirror: fetched once at startup, and pushed to in the background after
//! local mutations. Mirror failures are logged and otherwise ignored — the
//! visible collections may diverge from the remote table until the next
//! successful sync, which is an acknowledged property of this design.

use crate::content::Record;
use crate::gateway::GatewayClient;
use crate::persist::CollectionStore;
use crate::store::Store;

/// Fetch all three content collections from the gateway once, replacing the
/// local state with any non-empty result.
///
/// An unreachable gateway is not an error: the store keeps its local state,
/// an "offline mode" entry lands in the audit log, and `Ok(false)` is
/// returned. `Ok(true)` means the gateway answered.
pub async fn hydrate_from_gateway<S: CollectionStore>(
    store: &Store<S>,
    client: &GatewayClient,
) -> Result<bool, crate::store::StoreError> {
    let artworks = client.fetch_artworks().await;
    let books = client.fetch_books().await;
    let journal = client.fetch_journal().await;

    if artworks.is_err() && books.is_err() && journal.is_err() {
        tracing::warn!("gateway not reachable, keeping local state");
        store.add_log("Running in offline mode")?;
        return Ok(false);
    }

    if let Ok(artworks) = artworks {
        if !artworks.is_empty() {
            store.replace_artworks(artworks)?;
        }
    }
    if let Ok(books) = books {
        if !books.is_empty() {
            store.replace_books(books)?;
        }
    }
    if let Ok(journal) = journal {
        if !journal.is_empty() {
            store.replace_journal(journal)?;
        }
    }

    store.add_log("Connected to content database")?;
    Ok(true)
}

/// Fire-and-forget mirror writes to the gateway.
///
/// Each call spawns an independent task; nothing is awaited and nothing is
/// retried. Outside a tokio runtime the write is skipped with a warning.
#[derive(Debug, Clone)]
pub struct Mirror {
    client: GatewayClient,
}

impl Mirror {
    pub fn new(client: GatewayClient) -> Self {
        Mirror { client }
    }

    /// Push a record in the background.
    pub fn spawn_push<T: Record + 'static>(&self, record: T) {
        let client = self.client.clone();
        self.spawn(async move {
            if let Err(e) = client.push(&record).await {
                tracing::warn!(collection = T::COLLECTION, error = %e, "mirror push failed");
            }
        });
    }

    /// Delete a record in the background.
    pub fn spawn_delete<T: Record + 'static>(&self, id: &str) {
        let client = self.client.clone();
        let id = id.to_string();
        self.spawn(async move {
            if let Err(e) = client.delete::<T>(&id).await {
                tracing::warn!(collection = T::COLLECTION, error = %e, "mirror delete failed");
            }
        });
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(_) => tracing::warn!("no async runtime, mirror write skipped"),
        }
    }
}
