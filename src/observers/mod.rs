//! Element sinks: the observer trait and provided implementations.
//!
//! ## Architecture
//! ```text
//! Element flow:
//!   Signal ── on_next(E) ──► subscription guard ──► Observer::on_next(E)
//!                                      │
//!              ┌───────────────────────┼───────────────────────┐
//!              ▼                       ▼                       ▼
//!        custom Observer          Callbacks handlers      LogObserver
//!        (user logic)             (closures)              (stdout, `logging`)
//! ```
//!
//! ## Contents
//! - [`Observer`], [`ObserverRef`] — the sink trait and its shared handle
//! - [`Callbacks`] — optional next/completed/disposed handler bundle
//! - [`LogObserver`] — stdout observer for demos (feature `logging`)

mod callbacks;
mod observer;

pub use callbacks::Callbacks;
pub use observer::{Observer, ObserverRef};

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogObserver;
