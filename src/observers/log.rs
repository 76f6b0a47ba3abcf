//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints every notification to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [next] ticks value=1
//! [next] ticks value=2
//! [completed] ticks
//! ```

use std::fmt::Debug;

use super::Observer;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints each element (via `Debug`) and
/// the completion notification, tagged with a label so multiple signals can
/// share stdout.
///
/// Not intended for production use - implement a custom [`Observer`] for
/// structured logging or metrics collection.
pub struct LogObserver {
    label: &'static str,
}

impl LogObserver {
    /// Creates an observer tagging its output with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("signal")
    }
}

impl<E: Debug> Observer<E> for LogObserver {
    fn on_next(&self, element: E) {
        println!("[next] {} value={element:?}", self.label);
    }

    fn on_completed(&self) {
        println!("[completed] {}", self.label);
    }
}
