//! Single source of truth for which easter eggs the visitor has found.
//!
//! State is loaded once from the key-value store, every new discovery is
//! written back before listeners hear about it, and storage failures only
//! downgrade the tracker to memory-only operation.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::ops::Deref;
use std::rc::Rc;

use super::events::{DiscoveryEvent, EventBus, Subscription};
use super::storage::{browser_store, KeyValueStore};
use crate::config::SiteConfig;
use crate::model::{Achievement, AchievementId, Catalog};
use crate::util::{clog, cwarn};

/// Result of `AchievementTracker::record_discovery`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discovery {
    /// Newly found: persisted and broadcast.
    Recorded,
    /// Was already in the set; nothing happened.
    AlreadyFound,
    /// Not part of the catalog; nothing happened.
    UnknownId,
}

impl Discovery {
    pub fn already_found(&self) -> bool {
        matches!(self, Discovery::AlreadyFound)
    }
}

/// Parse the persisted JSON array. Anything else counts as nothing found.
pub fn parse_found(raw: &str) -> BTreeSet<AchievementId> {
    match serde_json::from_str::<Vec<AchievementId>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(_) => BTreeSet::new(),
    }
}

pub fn serialize_found(found: &BTreeSet<AchievementId>) -> String {
    // A set of integers always serializes.
    serde_json::to_string(found).unwrap_or_else(|_| "[]".to_string())
}

pub struct AchievementTracker {
    catalog: Catalog,
    store: Box<dyn KeyValueStore>,
    key: String,
    found: RefCell<BTreeSet<AchievementId>>,
    // Set after a failed write; from then on memory is authoritative.
    degraded: Cell<bool>,
    bus: EventBus<DiscoveryEvent>,
}

impl AchievementTracker {
    pub fn new(catalog: Catalog, store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let tracker = Self {
            catalog,
            store,
            key: key.into(),
            found: RefCell::new(BTreeSet::new()),
            degraded: Cell::new(false),
            bus: EventBus::new(),
        };
        let initial = tracker.load_state();
        *tracker.found.borrow_mut() = initial;
        tracker
    }

    /// Tracker backed by `localStorage` (or memory when that is disabled).
    pub fn for_browser(config: &SiteConfig) -> Self {
        Self::new(config.catalog.clone(), browser_store(), config.storage_key.clone())
    }

    /// Read the persisted set. Never writes; missing, unreadable or corrupt
    /// values yield an empty set. Ids outside the catalog are dropped.
    pub fn load_state(&self) -> BTreeSet<AchievementId> {
        if self.degraded.get() {
            return self.found.borrow().clone();
        }
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                cwarn(&format!("reading easter egg progress failed: {e}"));
                return BTreeSet::new();
            }
        };
        parse_found(&raw)
            .into_iter()
            .filter(|id| self.catalog.contains(*id))
            .collect()
    }

    pub fn record_discovery(&self, id: AchievementId, display_name: &str) -> Discovery {
        if !self.catalog.contains(id) {
            cwarn(&format!("ignoring discovery of unknown easter egg {id}"));
            return Discovery::UnknownId;
        }
        let snapshot = {
            let mut found = self.found.borrow_mut();
            if !found.insert(id) {
                return Discovery::AlreadyFound;
            }
            found.clone()
        };
        self.persist(&snapshot);
        clog(&format!(
            "easter egg found: {} ({}/{})",
            display_name,
            snapshot.len(),
            self.total()
        ));
        self.bus.emit(&DiscoveryEvent {
            egg_id: id,
            egg_name: display_name.to_string(),
        });
        Discovery::Recorded
    }

    /// `record_discovery` using the catalog's display name.
    pub fn record(&self, id: AchievementId) -> Discovery {
        let name = match self.catalog.get(id) {
            Some(a) => a.name.clone(),
            None => id.to_string(),
        };
        self.record_discovery(id, &name)
    }

    fn persist(&self, found: &BTreeSet<AchievementId>) {
        if self.degraded.get() {
            return;
        }
        if let Err(e) = self.store.set(&self.key, &serialize_found(found)) {
            cwarn(&format!("{e}; keeping easter egg progress in memory"));
            self.degraded.set(true);
        }
    }

    pub fn count(&self) -> usize {
        self.found.borrow().len()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == self.total()
    }

    pub fn is_found(&self, id: AchievementId) -> bool {
        self.found.borrow().contains(&id)
    }

    pub fn found(&self) -> BTreeSet<AchievementId> {
        self.found.borrow().clone()
    }

    /// Catalog entries not yet found, in catalog order.
    pub fn remaining(&self) -> Vec<&Achievement> {
        let found = self.found.borrow();
        self.catalog
            .iter()
            .filter(|a| !found.contains(&a.id))
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscribe(&self, listener: impl Fn(&DiscoveryEvent) + 'static) -> Subscription {
        self.bus.subscribe(listener)
    }

    /// Forget all progress. Listeners are not notified.
    pub fn reset(&self) {
        self.found.borrow_mut().clear();
        if let Err(e) = self.store.remove(&self.key) {
            cwarn(&format!("clearing easter egg progress failed: {e}"));
        }
    }
}

/// Shared handle suitable for a Yew context (compares by identity).
#[derive(Clone)]
pub struct SharedTracker(pub Rc<AchievementTracker>);

impl SharedTracker {
    pub fn new(tracker: AchievementTracker) -> Self {
        Self(Rc::new(tracker))
    }
}

impl PartialEq for SharedTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedTracker {
    type Target = AchievementTracker;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::state::storage::MemoryStore;

    const KEY: &str = "portfolio-eggs-found";

    fn catalog() -> Catalog {
        Catalog::new(
            (1..=4)
                .map(|i| Achievement::new(i, &format!("Egg {i}"), "hint", "here"))
                .collect(),
        )
        .unwrap()
    }

    fn tracker_on(store: Rc<MemoryStore>) -> AchievementTracker {
        AchievementTracker::new(catalog(), Box::new(store), KEY)
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota".to_string(),
            })
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("gone".to_string()))
        }
    }

    #[test]
    fn discovery_is_idempotent() {
        let t = tracker_on(Rc::new(MemoryStore::new()));
        assert_eq!(t.record_discovery(2, "Egg 2"), Discovery::Recorded);
        let second = t.record_discovery(2, "Egg 2");
        assert!(second.already_found());
        assert_eq!(t.count(), 1);
    }

    #[test]
    fn persisted_state_survives_new_tracker() {
        let store = Rc::new(MemoryStore::new());
        let t = tracker_on(store.clone());
        t.record(3);
        t.record(1);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[1,3]"));

        let fresh = tracker_on(store);
        assert_eq!(fresh.load_state(), BTreeSet::from([1, 3]));
        assert!(fresh.is_found(3));
        assert_eq!(fresh.count(), 2);
    }

    #[test]
    fn every_subset_round_trips() {
        for mask in 0u32..16 {
            let set: BTreeSet<AchievementId> = (1..=4).filter(|i| mask & (1 << (i - 1)) != 0).collect();
            assert_eq!(parse_found(&serialize_found(&set)), set);
        }
    }

    #[test]
    fn corrupt_storage_loads_empty() {
        let store = Rc::new(MemoryStore::with_item(KEY, "not json"));
        let t = tracker_on(store.clone());
        assert!(t.load_state().is_empty());
        assert_eq!(t.count(), 0);
        // Loading never rewrites the stored value.
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("not json"));
        assert!(parse_found(r#"{"ids":[1]}"#).is_empty());
        assert!(parse_found("[-1, 2]").is_empty());
    }

    #[test]
    fn load_dedups_and_drops_unknown_ids() {
        let t = tracker_on(Rc::new(MemoryStore::with_item(KEY, "[2,2,99,4]")));
        assert_eq!(t.found(), BTreeSet::from([2, 4]));
        assert!(t.count() <= t.total());
    }

    #[test]
    fn unknown_id_is_rejected() {
        let store = Rc::new(MemoryStore::new());
        let t = tracker_on(store.clone());
        assert_eq!(t.record_discovery(42, "Nope"), Discovery::UnknownId);
        assert_eq!(t.count(), 0);
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn listeners_see_persisted_state() {
        let store = Rc::new(MemoryStore::new());
        let t = Rc::new(tracker_on(store.clone()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            let store = store.clone();
            t.subscribe(move |e| {
                let persisted = parse_found(&store.get(KEY).unwrap().unwrap_or_default());
                seen.borrow_mut().push((e.egg_id, e.egg_name.clone(), persisted.contains(&e.egg_id)));
            })
        };
        t.record_discovery(1, "Konami");
        t.record_discovery(1, "Konami");
        assert_eq!(*seen.borrow(), vec![(1, "Konami".to_string(), true)]);
    }

    #[test]
    fn independent_listeners_all_fire() {
        let t = tracker_on(Rc::new(MemoryStore::new()));
        let hits = Rc::new(Cell::new(0));
        let subs: Vec<Subscription> = (0..3)
            .map(|_| {
                let hits = hits.clone();
                t.subscribe(move |_| hits.set(hits.get() + 1))
            })
            .collect();
        t.record(4);
        assert_eq!(hits.get(), 3);
        drop(subs);
        t.record(3);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn completion() {
        let t = tracker_on(Rc::new(MemoryStore::new()));
        for id in 1..=4 {
            assert!(!t.is_complete());
            t.record(id);
        }
        assert!(t.is_complete());
        assert!(t.remaining().is_empty());
    }

    #[test]
    fn broken_storage_degrades_to_memory() {
        let t = AchievementTracker::new(catalog(), Box::new(BrokenStore), KEY);
        assert_eq!(t.count(), 0);
        assert_eq!(t.record(1), Discovery::Recorded);
        assert_eq!(t.record(1), Discovery::AlreadyFound);
        assert_eq!(t.load_state(), BTreeSet::from([1]));
        t.reset();
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn reset_clears_storage() {
        let store = Rc::new(MemoryStore::new());
        let t = tracker_on(store.clone());
        t.record(2);
        t.reset();
        assert_eq!(store.get(KEY).unwrap(), None);
        assert_eq!(t.remaining().len(), 4);
    }
}
