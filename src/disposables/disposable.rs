//! # Disposable: one-shot subscription cancellation handle.
//!
//! [`Disposable`] represents one active subscription and supports a single,
//! idempotent release. It pairs a [`CancellationToken`] (the cancellation
//! signal other parts of the crate can observe) with a teardown closure that
//! runs at most once.
//!
//! ## Rules
//! - **Idempotent**: calling [`Disposable::dispose`] twice is a no-op.
//! - **Non-blocking**: `dispose()` never waits for a delivery that is already
//!   running on another thread; it prevents future deliveries and returns.
//! - **Explicit**: dropping a `Disposable` does **not** dispose it — the
//!   caller owns the subscription lifetime. Use
//!   [`DisposeBag`](crate::DisposeBag) to tie disposal to a scope.
//!
//! ## Example
//! ```rust
//! use signalcast::Disposable;
//!
//! let d = Disposable::new(|| println!("released"));
//! assert!(!d.is_disposed());
//! d.dispose();
//! d.dispose(); // no-op
//! assert!(d.is_disposed());
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

type Teardown = Box<dyn FnOnce() + Send>;

/// One-shot, idempotent cancellation handle for a subscription.
///
/// Cloning is cheap and clones share state: disposing any clone disposes the
/// subscription, and `is_disposed` agrees across all clones.
#[derive(Clone)]
#[must_use = "dropping a Disposable without calling dispose() leaves the subscription running"]
pub struct Disposable {
    token: CancellationToken,
    teardown: Arc<Mutex<Option<Teardown>>>,
}

impl Disposable {
    /// Creates a disposable that runs `teardown` on the first `dispose()` call.
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self::linked(CancellationToken::new(), teardown)
    }

    /// Creates a disposable with no teardown.
    ///
    /// Useful for producers whose subscription holds no resources
    /// (e.g. a sequence that completes synchronously during attach).
    pub fn noop() -> Self {
        Self {
            token: CancellationToken::new(),
            teardown: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a disposable sharing an existing cancellation token.
    ///
    /// The token may already be (or later become) cancelled by the
    /// subscription side; `is_disposed` then reports `true` even if
    /// `dispose()` was never called on this handle.
    pub(crate) fn linked(token: CancellationToken, teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            token,
            teardown: Arc::new(Mutex::new(Some(Box::new(teardown)))),
        }
    }

    /// Releases the subscription.
    ///
    /// Cancels the token and runs the teardown closure. Only the first call
    /// runs the teardown; later calls (from any clone, on any thread) are
    /// no-ops. Does not block: a callback already executing on another
    /// thread is allowed to finish, but no further delivery starts after
    /// this returns.
    pub fn dispose(&self) {
        self.token.cancel();
        let teardown = self
            .teardown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(f) = teardown {
            f();
        }
    }

    /// True once the subscription has terminated (disposal or completion).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
