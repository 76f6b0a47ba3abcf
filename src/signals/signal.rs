//! # Signal: an error-free push sequence.
//!
//! [`Signal`] wraps a [`Source`] — the raw subscription function — behind
//! the `emit` adapter family (see [`crate::signals`] module docs). A signal
//! cannot fail: the observer surface carries only elements and completion,
//! so there is no error path to handle or propagate.
//!
//! ## Construction
//! - [`Signal::new`] — from a subscription function (the producer
//!   primitive: `Fn(ObserverRef<E>) -> Disposable`).
//! - [`Signal::from_source`] — from an existing raw [`Source`].
//! - [`Signal::just`], [`Signal::empty`], [`Signal::never`],
//!   [`Signal::from_iter`] — cold convenience sequences; each subscription
//!   replays independently.
//! - [`Relay::to_signal`](crate::Relay::to_signal) — hot, fed by a relay.
//!
//! Subscriptions start eagerly: the producer runs inside the `emit` call,
//! before the [`Disposable`](crate::Disposable) is returned.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use signalcast::Signal;
//!
//! let signal = Signal::from_iter([1, 2, 3]);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let sub = signal.emit_next(move |v| sink.lock().unwrap().push(v));
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
//! sub.dispose(); // already completed; safe no-op
//! ```

use std::sync::Arc;

use crate::disposables::Disposable;
use crate::observers::ObserverRef;

use super::source::Source;

/// An error-free, push-based sequence of values over time.
///
/// Cheap to clone; clones share the producer. Every `emit` creates an
/// independent subscription with its own [`Disposable`].
pub struct Signal<E> {
    pub(crate) source: Source<E>,
}

impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<E: 'static> Signal<E> {
    /// Creates a signal from a subscription function.
    ///
    /// `subscribe` runs once per subscription, synchronously inside the
    /// `emit` call, and returns the producer-side disposable for that
    /// subscription. The observer it receives accepts only next/completed —
    /// a producer has no way to surface an error through this interface.
    pub fn new(subscribe: impl Fn(ObserverRef<E>) -> Disposable + Send + Sync + 'static) -> Self {
        Self {
            source: Source::new(subscribe),
        }
    }

    /// Wraps an existing raw [`Source`].
    #[must_use]
    pub fn from_source(source: Source<E>) -> Self {
        Self { source }
    }

    /// A signal that completes immediately without emitting.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|observer: ObserverRef<E>| {
            observer.on_completed();
            Disposable::noop()
        })
    }

    /// A signal that never emits and never completes.
    ///
    /// Subscriptions only terminate via `dispose()`.
    #[must_use]
    pub fn never() -> Self {
        Self::new(|_observer: ObserverRef<E>| Disposable::noop())
    }
}

impl<E: Clone + Send + Sync + 'static> Signal<E> {
    /// A signal emitting one element, then completing.
    #[must_use]
    pub fn just(element: E) -> Self {
        Self::new(move |observer: ObserverRef<E>| {
            observer.on_next(element.clone());
            observer.on_completed();
            Disposable::noop()
        })
    }

    /// A signal replaying the given elements, then completing.
    ///
    /// The elements are collected once; every subscription receives its own
    /// cloned pass over them.
    pub fn from_iter<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let elements: Arc<Vec<E>> = Arc::new(elements.into_iter().collect());
        Self::new(move |observer: ObserverRef<E>| {
            for element in elements.iter() {
                observer.on_next(element.clone());
            }
            observer.on_completed();
            Disposable::noop()
        })
    }
}
