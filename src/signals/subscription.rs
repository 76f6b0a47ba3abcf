//! # Subscription: the per-emit state machine.
//!
//! One [`Subscription`] exists per `emit` call. It sits between the producer
//! and the user's handlers, enforcing the termination contract:
//!
//! ```text
//! {Active} ──(element)──► {Active}
//! {Active} ──(graceful end)──► {Completed} ──(always)──► {Disposed}
//! {Active} ──(dispose())──► {Disposed}
//! ```
//!
//! ## Rules
//! - Elements are forwarded only while `Active`.
//! - The `completed` handler runs at most once, never after an external
//!   dispose won the race, and always strictly before the `disposed`
//!   handler.
//! - The `disposed` handler runs exactly once, on any termination path.
//! - Whichever path wins the state CAS also releases the upstream
//!   (producer-side) disposable; the loser is a no-op.
//!
//! Disposal never blocks: a delivery already running on another thread is
//! allowed to finish, future deliveries are gated out.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::disposables::Disposable;
use crate::observers::{Callbacks, Observer};

const ACTIVE: u8 = 0;
const COMPLETED: u8 = 1;
const DISPOSED: u8 = 2;

type NextFn<E> = Box<dyn Fn(E) + Send + Sync>;
type DoneFn = Box<dyn FnOnce() + Send>;

/// Producer-side disposable slot.
///
/// `Released` is terminal: assignments after termination are disposed on
/// the spot instead of stored.
enum Upstream {
    Unset,
    Set(Disposable),
    Released,
}

/// Guard observer enforcing the subscription state machine.
///
/// Implements [`Observer`] so it can be attached directly to a
/// [`Source`](crate::Source); the producer never sees the user's handlers.
pub(crate) struct Subscription<E> {
    state: AtomicU8,
    token: CancellationToken,
    next: Option<NextFn<E>>,
    completed: Mutex<Option<DoneFn>>,
    disposed: Mutex<Option<DoneFn>>,
    upstream: Mutex<Upstream>,
}

impl<E: 'static> Subscription<E> {
    pub(crate) fn new(callbacks: Callbacks<E>) -> Arc<Self> {
        Arc::new(Self {
            state: AtomicU8::new(ACTIVE),
            token: CancellationToken::new(),
            next: callbacks.next,
            completed: Mutex::new(callbacks.completed),
            disposed: Mutex::new(callbacks.disposed),
            upstream: Mutex::new(Upstream::Unset),
        })
    }

    /// Stores the producer's disposable once `attach` returns.
    ///
    /// If the subscription terminated while the producer was still inside
    /// `attach` (synchronous completion, or a dispose from another thread),
    /// the disposable is released immediately.
    pub(crate) fn set_upstream(&self, upstream: Disposable) {
        {
            let mut slot = self.upstream.lock().unwrap_or_else(PoisonError::into_inner);
            if matches!(*slot, Upstream::Unset) && self.state.load(Ordering::Acquire) == ACTIVE {
                *slot = Upstream::Set(upstream);
                return;
            }
        }
        upstream.dispose();
    }

    /// Builds the caller-facing handle.
    ///
    /// Shares the subscription token, so `is_disposed()` also turns true on
    /// graceful completion.
    pub(crate) fn handle(self: Arc<Self>) -> Disposable {
        let token = self.token.clone();
        Disposable::linked(token, move || self.dispose())
    }

    /// External termination: `Active → Disposed`.
    pub(crate) fn dispose(&self) {
        if self
            .state
            .compare_exchange(ACTIVE, DISPOSED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.token.cancel();
            self.finalize();
        }
    }

    /// Graceful termination: `Active → Completed → Disposed`.
    fn complete(&self) {
        if self
            .state
            .compare_exchange(ACTIVE, COMPLETED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.token.cancel();
            let completed = self
                .completed
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            if let Some(f) = completed {
                f();
            }
            self.state.store(DISPOSED, Ordering::Release);
            self.finalize();
        }
    }

    /// Runs exactly once, after the winning CAS: releases the upstream
    /// disposable and fires the `disposed` handler.
    fn finalize(&self) {
        let upstream = {
            let mut slot = self.upstream.lock().unwrap_or_else(PoisonError::into_inner);
            match std::mem::replace(&mut *slot, Upstream::Released) {
                Upstream::Set(d) => Some(d),
                Upstream::Unset | Upstream::Released => None,
            }
        };
        if let Some(d) = upstream {
            d.dispose();
        }

        let disposed = self
            .disposed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(f) = disposed {
            f();
        }
    }
}

impl<E: 'static> Observer<E> for Subscription<E> {
    fn on_next(&self, element: E) {
        if self.state.load(Ordering::Acquire) == ACTIVE {
            if let Some(next) = &self.next {
                next(element);
            }
        }
    }

    fn on_completed(&self) {
        self.complete();
    }
}
