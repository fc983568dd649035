//! Holder of the last fetched prompt collection
//!
//! Fetches can overlap (a delete's re-fetch and a save's re-fetch, say).
//! Each fetch takes a ticket; a result is applied only if its ticket is the
//! most recently issued one, so a slow older answer never overwrites a
//! newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use shared::models::PromptCollection;

/// Sequence number of one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct CollectionSlot {
    collection: RwLock<Option<PromptCollection>>,
    issued: AtomicU64,
}

impl CollectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store the outcome of the fetch behind `ticket`
    ///
    /// `None` is a failed fetch and clears the collection. Returns `false`
    /// when a newer fetch was issued meanwhile and the result was dropped.
    pub fn apply(&self, ticket: FetchTicket, result: Option<PromptCollection>) -> bool {
        let mut collection = self.collection.write();
        if ticket.0 != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.0, "Dropping stale fetch result");
            return false;
        }
        *collection = result;
        true
    }

    pub fn snapshot(&self) -> Option<PromptCollection> {
        self.collection.read().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(Option<&PromptCollection>) -> R) -> R {
        f(self.collection.read().as_ref())
    }
}
