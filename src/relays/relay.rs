//! # Relay: a hot, error-free broadcast sink.
//!
//! [`Relay`] is the multicast hub of the crate: producers push values into
//! [`Relay::accept`] and every current subscriber receives them, on the
//! accepting thread, in order. A relay never terminates and never errors —
//! subscribers only ever see `on_next`.
//!
//! ## Architecture
//! ```text
//! Producers (many):                    Subscribers (many):
//!   thread A ──┐                          ┌──► observer 1
//!   thread B ──┼──► accept(E) ── clone ───┼──► observer 2
//!   thread C ──┘    (synchronous)         └──► observer N
//! ```
//!
//! ## Rules
//! - **Synchronous fan-out**: `accept()` invokes every subscriber before it
//!   returns; no queue or worker is involved, so a slow subscriber slows the
//!   accepting thread, not other producers.
//! - **No replay**: a subscriber only sees values accepted after it
//!   subscribed (see [`BehaviorRelay`](crate::BehaviorRelay) for
//!   latest-value replay).
//! - **No termination**: relays have no completion; feeds are detached by
//!   disposing the subscription returned from [`Relay::subscribe`] or from
//!   the `emit` call that feeds the relay.
//!
//! Subscriber callbacks run outside the registry lock, so calling `accept`
//! or `subscribe` from inside a callback is allowed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::disposables::Disposable;
use crate::observers::ObserverRef;
use crate::signals::Signal;

/// Subscriber registry shared by [`Relay`] and
/// [`BehaviorRelay`](crate::BehaviorRelay).
///
/// Entries are keyed by a monotonically increasing id so removal is stable
/// under concurrent subscribe/unsubscribe.
pub(crate) struct Registry<E> {
    next_id: AtomicU64,
    sinks: Mutex<Vec<Entry<E>>>,
}

struct Entry<E> {
    id: u64,
    sink: ObserverRef<E>,
}

impl<E> Registry<E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            sinks: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn insert(&self, sink: ObserverRef<E>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Entry { id, sink });
        id
    }

    pub(crate) fn remove(&self, id: u64) {
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|entry| entry.id != id);
    }

    /// Clones the current sink set so delivery can run outside the lock.
    pub(crate) fn snapshot(&self) -> Vec<ObserverRef<E>> {
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| Arc::clone(&entry.sink))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Removal handle for one registry entry.
///
/// Holds the registry weakly: disposing after the relay itself is gone is a
/// no-op rather than a resurrection.
pub(crate) fn removal<E: 'static>(registry: &Arc<Registry<E>>, id: u64) -> Disposable {
    let registry: Weak<Registry<E>> = Arc::downgrade(registry);
    Disposable::new(move || {
        if let Some(r) = registry.upgrade() {
            r.remove(id);
        }
    })
}

/// Hot broadcast channel for error-free values.
///
/// Cheap to clone (internally holds an `Arc`-backed registry); clones feed
/// and serve the same subscriber set.
pub struct Relay<E> {
    registry: Arc<Registry<E>>,
}

impl<E> Clone for Relay<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E> Default for Relay<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Relay<E> {
    /// Creates a relay with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }

    /// Number of current subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }
}

impl<E: Clone> Relay<E> {
    /// Broadcasts a value to every current subscriber.
    ///
    /// Each subscriber receives a clone, invoked synchronously on the
    /// calling thread in subscription order. With no subscribers the value
    /// is dropped and this returns immediately.
    pub fn accept(&self, element: E) {
        for sink in self.registry.snapshot() {
            sink.on_next(element.clone());
        }
    }
}

impl<E: 'static> Relay<E> {
    /// Registers an observer for values accepted from now on.
    ///
    /// The returned [`Disposable`] detaches only this observer; other
    /// subscribers and the relay itself are unaffected.
    pub fn subscribe(&self, observer: ObserverRef<E>) -> Disposable {
        let id = self.registry.insert(observer);
        removal(&self.registry, id)
    }

    /// Exposes the relay as a [`Signal`] of its future values.
    ///
    /// Each `emit` on the signal registers an independent subscriber.
    /// The signal never completes, since a relay never terminates.
    #[must_use]
    pub fn to_signal(&self) -> Signal<E> {
        let relay = self.clone();
        Signal::new(move |observer| relay.subscribe(observer))
    }
}
