//! Generic live collection
//!
//! A collection is an insertion-ordered map of documents plus a list of
//! registered watchers. Every mutation re-evaluates each watcher's filter
//! over the full collection and pushes a fresh snapshot; watchers whose
//! subscribers have gone away are pruned on the next notification pass.
//! All writes are single-document and atomic under the collection lock.

use std::sync::Arc;

use parking_lot::RwLock;

use fest_core::{DocumentId, Snapshot, SnapshotSender, Subscription};

/// Watcher filter over a single document
pub(crate) type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One registered live query
struct Watcher<T> {
    filter: Filter<T>,
    tx: SnapshotSender<T>,
}

struct Inner<T> {
    docs: Vec<(DocumentId, T)>,
    watchers: Vec<Watcher<T>>,
}

/// Insertion-ordered document collection with live filtered subscriptions
pub(crate) struct Collection<T> {
    name: &'static str,
    inner: RwLock<Inner<T>>,
}

impl<T: Clone + Send + 'static> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Inner {
                docs: Vec::new(),
                watchers: Vec::new(),
            }),
        }
    }

    /// Collection name, for logging
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Insert a new document under `id`
    pub fn insert(&self, id: DocumentId, doc: T) {
        let mut inner = self.inner.write();
        inner.docs.push((id, doc));
        Self::notify(&mut inner);
    }

    /// Create-or-replace the document under `id`
    pub fn upsert(&self, id: DocumentId, doc: T) {
        let mut inner = self.inner.write();
        if let Some(entry) = inner.docs.iter_mut().find(|(key, _)| *key == id) {
            entry.1 = doc;
        } else {
            inner.docs.push((id, doc));
        }
        Self::notify(&mut inner);
    }

    /// Mutate every document matching `pred`, returning how many changed
    pub fn update_where(
        &self,
        pred: impl Fn(&T) -> bool,
        mutate: impl Fn(&mut T),
    ) -> u64 {
        let mut inner = self.inner.write();
        let mut changed = 0;
        for (_, doc) in &mut inner.docs {
            if pred(doc) {
                mutate(doc);
                changed += 1;
            }
        }
        if changed > 0 {
            Self::notify(&mut inner);
        }
        changed
    }

    /// Remove the document under `id`
    pub fn remove(&self, id: &DocumentId) -> Option<T> {
        let mut inner = self.inner.write();
        let pos = inner.docs.iter().position(|(key, _)| key == id)?;
        let (_, doc) = inner.docs.remove(pos);
        Self::notify(&mut inner);
        Some(doc)
    }

    /// Fetch the document under `id`
    pub fn get(&self, id: &DocumentId) -> Option<T> {
        self.inner
            .read()
            .docs
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, doc)| doc.clone())
    }

    /// One-shot filtered query in insertion order
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .docs
            .iter()
            .map(|(_, doc)| doc)
            .filter(|doc| pred(doc))
            .cloned()
            .collect()
    }

    /// Register a live query; the initial snapshot is delivered immediately
    pub fn watch(&self, filter: Filter<T>) -> Subscription<T> {
        let (tx, sub) = Subscription::channel();
        let mut inner = self.inner.write();
        let initial = Self::snapshot_for(&inner.docs, &filter);
        tx.send(initial);
        inner.watchers.push(Watcher { filter, tx });
        sub
    }

    /// Number of live watchers (lapsed ones are counted until pruned)
    pub fn watcher_count(&self) -> usize {
        self.inner.read().watchers.len()
    }

    fn snapshot_for(docs: &[(DocumentId, T)], filter: &Filter<T>) -> Snapshot<T> {
        Snapshot::new(
            docs.iter()
                .map(|(_, doc)| doc)
                .filter(|doc| filter(doc))
                .cloned()
                .collect(),
        )
    }

    /// Push fresh snapshots to all watchers, pruning lapsed ones
    fn notify(inner: &mut Inner<T>) {
        let docs = &inner.docs;
        inner
            .watchers
            .retain(|watcher| watcher.tx.send(Self::snapshot_for(docs, &watcher.filter)));
    }
}
