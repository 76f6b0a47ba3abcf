//! # DisposeBag: scope-tied disposal aggregation.
//!
//! A [`DisposeBag`] collects [`Disposable`]s and releases all of them when
//! the bag itself is disposed or dropped. It is the RAII companion to
//! [`Disposable`]'s explicit-lifetime model: keep the bag alive as long as
//! the subscriptions should stay active, and everything is torn down
//! together when it goes out of scope.
//!
//! ## Rules
//! - Disposal order is insertion order.
//! - Inserting into a bag that was already disposed disposes the item
//!   immediately instead of retaining it.
//! - `dispose()` is idempotent; `Drop` calls it.
//!
//! ## Example
//! ```rust
//! use signalcast::{DisposeBag, Signal};
//!
//! let bag = DisposeBag::new();
//! let signal = Signal::from_iter([1, 2, 3]);
//! bag.insert(signal.emit_next(|v| println!("got {v}")));
//! // all subscriptions in the bag are disposed when `bag` drops
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use super::Disposable;

/// Collects disposables and releases them together.
#[derive(Debug, Default)]
pub struct DisposeBag {
    disposed: AtomicBool,
    items: Mutex<Vec<Disposable>>,
}

impl DisposeBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disposed: AtomicBool::new(false),
            items: Mutex::new(Vec::new()),
        }
    }

    /// Adds a disposable to the bag.
    ///
    /// If the bag was already disposed, `item` is disposed immediately.
    pub fn insert(&self, item: Disposable) {
        {
            let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
            // Checked under the lock so a concurrent dispose() cannot strand the item.
            if !self.disposed.load(Ordering::Acquire) {
                items.push(item);
                return;
            }
        }
        item.dispose();
    }

    /// Disposes everything in the bag, in insertion order.
    ///
    /// Idempotent; later `insert` calls dispose their item immediately.
    pub fn dispose(&self) {
        let drained = {
            let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
            if self.disposed.swap(true, Ordering::AcqRel) {
                return;
            }
            std::mem::take(&mut *items)
        };
        for item in drained {
            item.dispose();
        }
    }

    /// Number of disposables currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if the bag holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}
