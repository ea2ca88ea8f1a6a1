//! Live-query subscription primitive
//!
//! The hosted document store pushes the full current result set of a
//! filtered query to every subscriber: once immediately on subscribe, then
//! again after every change to the collection. [`Subscription`] is the
//! receiving half of that contract; dropping it releases the watcher on the
//! store side (the sender observes the closed channel and is pruned).

use tokio::sync::mpsc;

/// Full current result set of a live filtered query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub docs: Vec<T>,
}

impl<T> Snapshot<T> {
    /// Create a snapshot from the matching documents
    pub fn new(docs: Vec<T>) -> Self {
        Self { docs }
    }

    /// Number of matching documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True if no documents match
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { docs: Vec::new() }
    }
}

/// Sending half held by the store for one registered watcher
#[derive(Debug, Clone)]
pub struct SnapshotSender<T> {
    tx: mpsc::UnboundedSender<Snapshot<T>>,
}

impl<T> SnapshotSender<T> {
    /// Push a snapshot; returns false if the subscriber has gone away
    pub fn send(&self, snapshot: Snapshot<T>) -> bool {
        self.tx.send(snapshot).is_ok()
    }

    /// True if the subscriber dropped its [`Subscription`]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Handle to a live filtered query
///
/// Receives a [`Snapshot`] immediately after subscribing and after every
/// subsequent change. `next` returning `None` means the upstream watcher is
/// gone (store dropped or subscription lapsed); consumers re-subscribe by
/// calling the watch method again, there is no retry inside the handle.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<Snapshot<T>>,
}

impl<T> Subscription<T> {
    /// Create a connected sender/subscription pair
    pub fn channel() -> (SnapshotSender<T>, Subscription<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SnapshotSender { tx }, Subscription { rx })
    }

    /// Wait for the next snapshot
    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        self.rx.recv().await
    }

    /// Non-blocking poll for an already-delivered snapshot
    pub fn try_next(&mut self) -> Option<Snapshot<T>> {
        self.rx.try_recv().ok()
    }
}
