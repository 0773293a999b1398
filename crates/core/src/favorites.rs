//! User-favorited product ids.
//!
//! A set of product ids, independent of the cart. The set owns an explicit
//! observer list instead of broadcasting on an ambient process-wide channel:
//! anything that shows a favorites badge subscribes here and is handed the
//! new size on every mutation, without re-reading the whole set.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Observer notified with the new set size after every mutation.
pub trait FavoritesObserver: Send + Sync {
    fn favorites_updated(&self, count: usize);
}

/// The favorites set.
///
/// Add and remove are idempotent: inserting a present id or removing an
/// absent one changes nothing and raises no error. Mutations notify
/// subscribers unconditionally, no-op or not, so badge listeners never
/// depend on whether a toggle actually changed the set.
///
/// Only the ids serialize; observers are per-session wiring and are
/// re-subscribed after a snapshot restore.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ProductId>", into = "Vec<ProductId>")]
pub struct FavoritesSet {
    ids: BTreeSet<ProductId>,
    observers: Vec<Arc<dyn FavoritesObserver>>,
}

impl FavoritesSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for size-change notifications.
    pub fn subscribe(&mut self, observer: Arc<dyn FavoritesObserver>) {
        self.observers.push(observer);
    }

    /// Add a product id. Idempotent.
    pub fn add(&mut self, product_id: ProductId) {
        self.ids.insert(product_id);
        self.notify();
    }

    /// Remove a product id. No-op when absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.ids.remove(product_id);
        self.notify();
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.ids.contains(product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The favorited ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    fn notify(&self) {
        let count = self.ids.len();
        for observer in &self.observers {
            observer.favorites_updated(count);
        }
    }
}

impl From<Vec<ProductId>> for FavoritesSet {
    fn from(ids: Vec<ProductId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            observers: Vec::new(),
        }
    }
}

impl From<FavoritesSet> for Vec<ProductId> {
    fn from(set: FavoritesSet) -> Self {
        set.ids.into_iter().collect()
    }
}

impl core::fmt::Debug for FavoritesSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FavoritesSet")
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        counts: Mutex<Vec<usize>>,
    }

    impl FavoritesObserver for Recorder {
        fn favorites_updated(&self, count: usize) {
            self.counts.lock().expect("lock").push(count);
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = FavoritesSet::new();
        favorites.add(ProductId::from("a"));
        favorites.add(ProductId::from("a"));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(&ProductId::from("a")));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesSet::new();
        favorites.add(ProductId::from("a"));
        favorites.remove(&ProductId::from("missing"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_observers_receive_every_mutation() {
        let recorder = Arc::new(Recorder::default());
        let mut favorites = FavoritesSet::new();
        favorites.subscribe(recorder.clone());

        favorites.add(ProductId::from("a"));
        favorites.add(ProductId::from("b"));
        // no-op mutations still notify
        favorites.add(ProductId::from("a"));
        favorites.remove(&ProductId::from("b"));

        let counts = recorder.counts.lock().expect("lock").clone();
        assert_eq!(counts, [1, 2, 2, 1]);
    }

    #[test]
    fn test_snapshot_round_trip_drops_observers_only() {
        let mut favorites = FavoritesSet::new();
        favorites.subscribe(Arc::new(Recorder::default()));
        favorites.add(ProductId::from("b"));
        favorites.add(ProductId::from("a"));

        let snapshot = serde_json::to_string(&favorites).expect("serialize");
        // plain array of ids, not a struct wrapper
        assert_eq!(snapshot, r#"["a","b"]"#);

        let restored: FavoritesSet = serde_json::from_str(&snapshot).expect("deserialize");
        assert_eq!(restored.len(), 2);
        assert!(restored.contains(&ProductId::from("a")));
    }
}
