//! # Source: the raw multicast stream representation.
//!
//! [`Source`] is what sits underneath a [`Signal`](crate::Signal): a
//! cloneable handle around the subscription function itself. Attaching an
//! observer starts delivery eagerly and returns the producer's
//! [`Disposable`].
//!
//! Most code should use [`Signal`](crate::Signal) and its `emit` family;
//! the raw source is handed out by
//! [`Signal::emit_with`](crate::Signal::emit_with) so custom sink protocols
//! can decide how to subscribe themselves.

use std::fmt;
use std::sync::Arc;

use crate::disposables::Disposable;
use crate::observers::ObserverRef;

type SubscribeFn<E> = dyn Fn(ObserverRef<E>) -> Disposable + Send + Sync;

/// Raw multicast stream: a shared handle to a subscription function.
///
/// Cheap to clone (internally holds an `Arc`'d function); all clones attach
/// observers to the same producer.
pub struct Source<E> {
    subscribe: Arc<SubscribeFn<E>>,
}

impl<E> Clone for Source<E> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Arc::clone(&self.subscribe),
        }
    }
}

impl<E: 'static> Source<E> {
    /// Wraps a subscription function into a source.
    ///
    /// The function is invoked once per attached observer and must return
    /// the disposable releasing that one subscription. It has no way to
    /// report failure: the observer surface carries only next/completed.
    pub fn new(subscribe: impl Fn(ObserverRef<E>) -> Disposable + Send + Sync + 'static) -> Self {
        Self {
            subscribe: Arc::new(subscribe),
        }
    }

    /// Attaches an observer, starting delivery synchronously.
    ///
    /// The producer may emit (and even complete) before this returns.
    pub fn attach(&self, observer: ObserverRef<E>) -> Disposable {
        (self.subscribe)(observer)
    }
}

impl<E> fmt::Debug for Source<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}
