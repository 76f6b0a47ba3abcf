//! # Callbacks: the optional handler bundle for `emit`.
//!
//! [`Callbacks`] carries up to three handlers for one subscription:
//!
//! | Handler | Invoked |
//! |---|---|
//! | `next` | once per element, in order |
//! | `completed` | at most once, only on graceful termination |
//! | `disposed` | exactly once, on any termination |
//!
//! Any omitted handler is a no-op. Built in the same `with_*` style the rest
//! of the crate uses:
//!
//! ```rust
//! use signalcast::{Callbacks, Signal};
//!
//! let signal = Signal::from_iter(["a", "b"]);
//! let sub = signal.emit(
//!     Callbacks::new()
//!         .with_next(|s| println!("next: {s}"))
//!         .with_completed(|| println!("completed"))
//!         .with_disposed(|| println!("disposed")),
//! );
//! sub.dispose(); // no-op: the sequence already completed
//! ```

pub(crate) type NextFn<E> = Box<dyn Fn(E) + Send + Sync>;
pub(crate) type DoneFn = Box<dyn FnOnce() + Send>;

/// Optional handler set for a single subscription.
///
/// The `next` handler may run many times and is shared with the emitting
/// thread (`Fn`); `completed` and `disposed` run at most once (`FnOnce`).
pub struct Callbacks<E> {
    pub(crate) next: Option<NextFn<E>>,
    pub(crate) completed: Option<DoneFn>,
    pub(crate) disposed: Option<DoneFn>,
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Callbacks<E> {
    /// Creates an empty bundle; every notification is a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            completed: None,
            disposed: None,
        }
    }

    /// Sets the per-element handler.
    #[must_use]
    pub fn with_next(mut self, f: impl Fn(E) + Send + Sync + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the graceful-termination handler.
    ///
    /// Runs at most once, and never after an external `dispose()` won the
    /// race against natural completion.
    #[must_use]
    pub fn with_completed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.completed = Some(Box::new(f));
        self
    }

    /// Sets the termination handler.
    ///
    /// Runs exactly once per subscription, whether the sequence completed
    /// gracefully or the subscription was disposed. On graceful completion
    /// it runs strictly after the `completed` handler.
    #[must_use]
    pub fn with_disposed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.disposed = Some(Box::new(f));
        self
    }
}
