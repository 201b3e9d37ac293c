//! Persistence service handles snapshot load/save for lists and the user name.
//!
//! DESIGN
//! ======
//! State lives under two fixed keys: `userName` (plain string) and
//! `shoppingLists` (JSON snapshot of the whole collection). Every mutation is
//! followed by a full snapshot save. Saves are serialized at issue time and
//! handed to a single background writer over a bounded channel, so storage
//! I/O never blocks a mutation and saves land in issue order: an older
//! snapshot can never overwrite a newer one. When several saves for the same
//! key are queued, only the latest is written.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and treated as no-ops; in-memory state stays
//! authoritative for the session. A malformed stored snapshot fails open to
//! an empty collection and is logged as data loss. There is no retry.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::PersistConfig;
use crate::model::ShoppingList;
use crate::storage::{KeyValueStore, StorageError};

pub const USER_NAME_KEY: &str = "userName";
pub const SHOPPING_LISTS_KEY: &str = "shoppingLists";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("persistence worker stopped")]
    WorkerStopped,
}

#[derive(Debug)]
enum PersistCommand {
    Save { key: &'static str, value: String },
    Flush(oneshot::Sender<()>),
}

// =============================================================================
// SNAPSHOT CODEC
// =============================================================================

/// Serialize the full collection into its stored form.
///
/// # Errors
///
/// Returns a serialization error; not expected for well-formed lists.
pub fn encode_lists(lists: &[ShoppingList]) -> Result<String, serde_json::Error> {
    serde_json::to_string(lists)
}

/// Parse a stored snapshot.
///
/// # Errors
///
/// Returns [`PersistError::Malformed`] if `raw` is not a valid snapshot.
pub fn decode_lists(raw: &str) -> Result<Vec<ShoppingList>, PersistError> {
    Ok(serde_json::from_str(raw)?)
}

// =============================================================================
// LOAD
// =============================================================================

/// Stored user name. Absent when unset or when the store cannot be read.
pub async fn load_profile(store: &dyn KeyValueStore) -> Option<String> {
    match store.get(USER_NAME_KEY).await {
        Ok(name) => name,
        Err(e) => {
            warn!(error = %e, key = USER_NAME_KEY, "failed to load user name");
            None
        }
    }
}

/// Stored collection, distinguishing "absent" from "unreadable".
///
/// # Errors
///
/// Returns a storage error if the store cannot be read, or
/// [`PersistError::Malformed`] if the stored snapshot does not parse.
pub async fn try_load_lists(store: &dyn KeyValueStore) -> Result<Option<Vec<ShoppingList>>, PersistError> {
    let Some(raw) = store.get(SHOPPING_LISTS_KEY).await? else {
        return Ok(None);
    };
    decode_lists(&raw).map(Some)
}

/// Stored collection. Absent, unreadable or malformed snapshots all yield an
/// empty collection.
pub async fn load_lists(store: &dyn KeyValueStore) -> Vec<ShoppingList> {
    match try_load_lists(store).await {
        Ok(Some(lists)) => {
            info!(count = lists.len(), "loaded shopping lists");
            lists
        }
        Ok(None) => Vec::new(),
        Err(PersistError::Malformed(e)) => {
            error!(error = %e, key = SHOPPING_LISTS_KEY, "stored shopping lists are malformed; starting empty (data loss)");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, key = SHOPPING_LISTS_KEY, "failed to load shopping lists");
            Vec::new()
        }
    }
}

// =============================================================================
// WRITER
// =============================================================================

/// Sending side of the persistence worker. Cheap to clone.
#[derive(Clone)]
pub struct PersistHandle {
    tx: mpsc::Sender<PersistCommand>,
}

impl PersistHandle {
    /// Queue a full snapshot of `lists`. The snapshot is taken now; the write
    /// happens on the worker.
    pub async fn save_lists(&self, lists: &[ShoppingList]) {
        match encode_lists(lists) {
            Ok(value) => self.enqueue(SHOPPING_LISTS_KEY, value).await,
            Err(e) => error!(error = %e, count = lists.len(), "failed to serialize shopping lists"),
        }
    }

    /// Queue an overwrite of the stored user name.
    pub async fn save_profile(&self, name: &str) {
        self.enqueue(USER_NAME_KEY, name.to_owned()).await;
    }

    /// Wait until every save queued before this call has been written (or
    /// has failed and been logged).
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::WorkerStopped`] if the worker is gone.
    pub async fn flush(&self) -> Result<(), PersistError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(PersistCommand::Flush(ack_tx))
            .await
            .map_err(|_| PersistError::WorkerStopped)?;
        ack_rx.await.map_err(|_| PersistError::WorkerStopped)
    }

    async fn enqueue(&self, key: &'static str, value: String) {
        if self.tx.send(PersistCommand::Save { key, value }).await.is_err() {
            warn!(key, "persistence worker stopped; dropping save");
        }
    }
}

/// Spawn the single writer task. Dropping every [`PersistHandle`] drains the
/// queue and ends the task; await the returned handle to know it finished.
#[must_use]
pub fn spawn_persistence_worker(store: Arc<dyn KeyValueStore>, config: PersistConfig) -> (PersistHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
    debug!(queue_capacity = config.queue_capacity, batch_size = config.batch_size, "persistence worker configured");
    let task = tokio::spawn(run_worker(store, rx, config.batch_size.max(1)));
    (PersistHandle { tx }, task)
}

async fn run_worker(store: Arc<dyn KeyValueStore>, mut rx: mpsc::Receiver<PersistCommand>, batch_size: usize) {
    let mut pending: Vec<(&'static str, String)> = Vec::new();
    let mut acks: Vec<oneshot::Sender<()>> = Vec::new();

    while let Some(command) = rx.recv().await {
        absorb(command, &mut pending, &mut acks);

        // PHASE: COALESCE
        // WHY: anything already queued is superseded by later saves of the same key.
        let mut absorbed = 1;
        while absorbed < batch_size {
            let Ok(command) = rx.try_recv() else {
                break;
            };
            absorb(command, &mut pending, &mut acks);
            absorbed += 1;
        }

        // PHASE: WRITE IN ISSUE ORDER, THEN ACK FLUSHES
        write_pending(store.as_ref(), &mut pending).await;
        for ack in acks.drain(..) {
            let _ = ack.send(());
        }
    }

    debug!("persistence worker stopped");
}

fn absorb(command: PersistCommand, pending: &mut Vec<(&'static str, String)>, acks: &mut Vec<oneshot::Sender<()>>) {
    match command {
        PersistCommand::Save { key, value } => {
            pending.retain(|(queued, _)| *queued != key);
            pending.push((key, value));
        }
        PersistCommand::Flush(ack) => acks.push(ack),
    }
}

async fn write_pending(store: &dyn KeyValueStore, pending: &mut Vec<(&'static str, String)>) {
    for (key, value) in pending.drain(..) {
        match store.set(key, &value).await {
            Ok(()) => debug!(key, bytes = value.len(), "snapshot written"),
            Err(e) => error!(error = %e, key, "snapshot write failed; change may not persist"),
        }
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
