//! # Observer: the element sink trait.
//!
//! [`Observer`] is the extension point for consuming a
//! [`Signal`](crate::Signal)'s elements. Implementations receive every
//! element in emission order, plus a completion notification when the
//! sequence ends gracefully.
//!
//! There is deliberately **no error method**: sequences in this crate cannot
//! fail, and the trait surface is closed so an error channel cannot be
//! smuggled in by an implementation.
//!
//! # Example: custom observer
//! ```rust
//! use std::sync::Arc;
//! use signalcast::{Observer, Signal};
//!
//! struct Printer;
//!
//! impl Observer<i32> for Printer {
//!     fn on_next(&self, element: i32) {
//!         println!("got {element}");
//!     }
//!
//!     fn on_completed(&self) {
//!         println!("done");
//!     }
//! }
//!
//! let signal = Signal::from_iter([1, 2, 3]);
//! let sub = signal.emit_to(Arc::new(Printer));
//! sub.dispose();
//! ```

use std::sync::Arc;

/// # Trait for receiving elements from a signal.
///
/// Called synchronously on the thread that emits. Implementations must be
/// shareable across threads; delivery for a single subscription is never
/// reordered.
pub trait Observer<E>: Send + Sync {
    /// Called once per emitted element, in emission order.
    fn on_next(&self, element: E);

    /// Called at most once, on graceful termination of the sequence.
    ///
    /// Not called when the subscription is disposed externally.
    fn on_completed(&self) {}
}

/// Shared handle to an observer (`Arc<dyn Observer<E>>`).
pub type ObserverRef<E> = Arc<dyn Observer<E>>;
