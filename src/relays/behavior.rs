//! # BehaviorRelay: a relay that retains its latest value.
//!
//! [`BehaviorRelay`] is a [`Relay`](crate::Relay) with memory: it is seeded
//! with an initial value, every `accept` replaces the retained value before
//! broadcasting it, and a new subscriber receives the retained value first.
//! Like the plain relay it never terminates and never errors.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use signalcast::{BehaviorRelay, Observer};
//!
//! struct Printer;
//! impl Observer<u32> for Printer {
//!     fn on_next(&self, v: u32) {
//!         println!("level = {v}");
//!     }
//! }
//!
//! let level = BehaviorRelay::new(0);
//! level.accept(3);
//!
//! let sub = level.subscribe(Arc::new(Printer)); // prints "level = 3" immediately
//! assert_eq!(level.value(), 3);
//! sub.dispose();
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::disposables::Disposable;
use crate::observers::ObserverRef;
use crate::signals::Signal;

use super::relay::{removal, Registry};

/// Hot broadcast sink that retains and replays its latest value.
///
/// Cheap to clone; clones share the retained value and the subscriber set.
pub struct BehaviorRelay<E> {
    registry: Arc<Registry<E>>,
    value: Arc<RwLock<E>>,
}

impl<E> Clone for BehaviorRelay<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            value: Arc::clone(&self.value),
        }
    }
}

impl<E: Clone> BehaviorRelay<E> {
    /// Creates a relay retaining `initial` as its current value.
    #[must_use]
    pub fn new(initial: E) -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            value: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns a clone of the retained value.
    #[must_use]
    pub fn value(&self) -> E {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the retained value and broadcasts it to every subscriber.
    ///
    /// The value is stored before fan-out, so `value()` observed from a
    /// subscriber callback already returns the element being delivered.
    pub fn accept(&self, element: E) {
        {
            let mut value = self.value.write().unwrap_or_else(PoisonError::into_inner);
            *value = element.clone();
        }
        for sink in self.registry.snapshot() {
            sink.on_next(element.clone());
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

impl<E: Clone + 'static> BehaviorRelay<E> {
    /// Registers an observer, delivering the retained value first.
    ///
    /// The retained value is read when the observer is registered and
    /// delivered outside the registry lock. When `accept` races on another
    /// thread, that delivery may interleave with the initial value; on a
    /// single thread the order is always initial value, then later accepts.
    pub fn subscribe(&self, observer: ObserverRef<E>) -> Disposable {
        let current = self.value();
        let id = self.registry.insert(Arc::clone(&observer));
        observer.on_next(current);
        removal(&self.registry, id)
    }
}

impl<E: Clone + Send + Sync + 'static> BehaviorRelay<E> {
    /// Exposes the relay as a [`Signal`]: current value first, then updates.
    ///
    /// The signal never completes, since a relay never terminates.
    #[must_use]
    pub fn to_signal(&self) -> Signal<E> {
        let relay = self.clone();
        Signal::new(move |observer| relay.subscribe(observer))
    }
}
