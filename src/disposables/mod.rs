//! Subscription cancellation: handles and aggregation.
//!
//! ## Contents
//! - [`Disposable`] — one-shot, idempotent release of a single subscription
//! - [`DisposeBag`] — RAII aggregation that disposes everything it holds on drop
//!
//! Disposal is explicit: a dropped [`Disposable`] leaves its subscription
//! running. Put handles into a [`DisposeBag`] to tie them to a scope.

mod bag;
mod disposable;

pub use bag::DisposeBag;
pub use disposable::Disposable;
