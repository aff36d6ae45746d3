//! Holder of the snapshot currently displayed.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use opsboard_core::Snapshot;

/// Single-writer store for the displayed [`Snapshot`].
///
/// Readers subscribe and only ever observe whole snapshots. Writes go
/// through [`SnapshotStore::publish`], which drops anything that does not
/// supersede the held snapshot, so a slow older cycle cannot overwrite a
/// newer one.
#[derive(Debug)]
pub struct SnapshotStore {
    tx: watch::Sender<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Create a store holding [`Snapshot::initial`].
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Snapshot::initial()));
        Self { tx }
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.tx.subscribe()
    }

    /// The snapshot currently held.
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.tx.borrow())
    }

    /// Replace the held snapshot if `snapshot` supersedes it.
    ///
    /// Returns false when the snapshot was stale and discarded.
    pub fn publish(&self, snapshot: Snapshot) -> bool {
        let cycle = snapshot.cycle;
        let accepted = self.tx.send_if_modified(|current| {
            if snapshot.supersedes(current) {
                *current = Arc::new(snapshot);
                true
            } else {
                false
            }
        });

        if !accepted {
            debug!(cycle, held = self.tx.borrow().cycle, "Discarded stale snapshot");
        }
        accepted
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
