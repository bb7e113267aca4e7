//! Shared profile store handed to components through context.
//!
//! Writes always replace the whole record. Subscribers are notified after
//! every `submit` and `clear`, on the same thread, in subscription order.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, error, info};

use super::profile::Profile;
use super::storage::{self, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Option<&Profile>)>;

struct StoreInner {
    backend: Rc<dyn StorageBackend>,
    profile: RefCell<Option<Profile>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Cheap-to-clone handle; clones share the same record and listeners.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Rc<StoreInner>,
}

impl ProfileStore {
    /// Open the store and load whatever record the backend holds.
    pub fn open(backend: Rc<dyn StorageBackend>) -> Self {
        let profile = storage::load(backend.as_ref());
        Self {
            inner: Rc::new(StoreInner {
                backend,
                profile: RefCell::new(profile),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn profile(&self) -> Option<Profile> {
        self.inner.profile.borrow().clone()
    }

    pub fn has_profile(&self) -> bool {
        self.inner.profile.borrow().is_some()
    }

    /// Replace the record. The in-memory copy is updated even when the
    /// backend write fails, so the session keeps working.
    pub fn submit(&self, profile: Profile) {
        if let Err(err) = storage::save(self.inner.backend.as_ref(), &profile) {
            error!(%err, "failed to persist profile");
        } else {
            info!(name = %profile.name, "profile saved");
        }
        self.inner.profile.replace(Some(profile));
        self.notify();
    }

    /// Remove the record. Callers confirm with the user first.
    pub fn clear(&self) {
        if let Err(err) = storage::clear(self.inner.backend.as_ref()) {
            error!(%err, "failed to remove saved profile");
        } else {
            info!("profile cleared");
        }
        self.inner.profile.replace(None);
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&Profile>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        debug!(?id, "store subscriber added");
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Snapshot both so listeners may (un)subscribe or read the store.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let current = self.profile();
        for listener in listeners {
            listener(current.as_ref());
        }
    }
}

impl PartialEq for ProfileStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStore")
            .field("profile", &self.inner.profile.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expectancy::CountryCode;
    use crate::core::storage::MemoryBackend;

    fn profile(name: &str) -> Profile {
        Profile {
            id: None,
            name: name.into(),
            birth_year: 1990,
            nationality: CountryCode::new("us"),
            healthy_food: false,
            running: true,
            alcohol: false,
            smoking: false,
        }
    }

    #[test]
    fn starts_absent_then_loads_on_reopen() {
        let backend = Rc::new(MemoryBackend::default());
        let store = ProfileStore::open(backend.clone());
        assert!(!store.has_profile());

        store.submit(profile("Ada"));
        let reopened = ProfileStore::open(backend);
        assert_eq!(reopened.profile(), Some(profile("Ada")));
    }

    #[test]
    fn notifies_subscribers_on_every_write() {
        let store = ProfileStore::open(Rc::new(MemoryBackend::default()));
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let sink = seen.clone();
        let id = store.subscribe(move |p| sink.borrow_mut().push(p.map(|p| p.name.clone())));

        store.submit(profile("Ada"));
        store.submit(profile("Grace"));
        store.clear();
        store.unsubscribe(id);
        store.submit(profile("Lin"));

        assert_eq!(
            *seen.borrow(),
            vec![Some("Ada".to_string()), Some("Grace".to_string()), None]
        );
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let store = ProfileStore::open(Rc::new(MemoryBackend::default()));
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::default();
        let hits = Rc::new(Cell::new(0));
        let (store_ref, slot_ref, hits_ref) = (store.clone(), slot.clone(), hits.clone());
        let id = store.subscribe(move |_| {
            hits_ref.set(hits_ref.get() + 1);
            if let Some(id) = slot_ref.get() {
                store_ref.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        store.submit(profile("Ada"));
        store.submit(profile("Ada"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn clones_share_state() {
        let store = ProfileStore::open(Rc::new(MemoryBackend::default()));
        let other = store.clone();
        store.submit(profile("Ada"));
        assert!(other.has_profile());
        assert_eq!(store, other);
    }
}
