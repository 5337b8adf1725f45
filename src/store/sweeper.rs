//! Background notification sweeper.
//!
//! A small poll-loop thread that drops expired notifications on an
//! interval. There are no per-toast cancellation hooks: once queued, a
//! notification lives until dismissed or swept.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::persist::CollectionStore;

use super::Store;

/// Handle to the sweeper thread. Drop or call `stop()` to shut down.
pub struct NotificationSweeper {
    stop_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<usize>>,
}

impl NotificationSweeper {
    /// Stop the sweeper and wait for it to finish. Returns the total
    /// number of notifications expired over its lifetime.
    pub fn stop(mut self) -> usize {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or(0)
        } else {
            0
        }
    }
}

impl Drop for NotificationSweeper {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
    }
}

/// Spawn the sweeper thread for a store.
pub(super) fn spawn<S>(store: Store<S>, poll_interval: Duration) -> NotificationSweeper
where
    S: CollectionStore + Send + Sync + 'static,
{
    let (stop_tx, stop_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let mut expired = 0usize;

        loop {
            match stop_rx.recv_timeout(poll_interval) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }

            expired += store.sweep_notifications();
        }

        expired
    });

    NotificationSweeper {
        stop_tx,
        handle: Some(handle),
    }
}
