//! # signalcast
//!
//! **Signalcast** is a lightweight error-free notification primitive for Rust.
//!
//! It provides a minimal single-producer/multiple-consumer push pipeline:
//! signals emit values toward observers, relays rebroadcast them, and every
//! subscription is released through an idempotent disposable. Sequences
//! cannot fail by construction - the observer surface has no error channel.
//! The crate is designed as a building block for higher-level event wiring,
//! not as a reactive-operator library.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//!     │   producer   │    │   producer   │    │ cold source  │
//!     │ (Relay feed) │    │ (Signal::new)│    │ (from_iter)  │
//!     └──────┬───────┘    └──────┬───────┘    └──────┬───────┘
//!            ▼                   ▼                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Signal<E>  (wraps Source<E>: Fn(ObserverRef<E>) -> Disposable)   │
//! └──────┬──────────────┬──────────────────┬───────────────┬──────────┘
//!        │ emit_to      │ emit_to_relay    │ emit(..)      │ emit_with
//!        ▼              ▼                  ▼               ▼
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐
//! │  Observer<E> │  │   Relay<E>   │  │ Callbacks<E> │  │ custom sink │
//! │ (user trait) │  │ accept → fan │  │ next/compl./ │  │ fn(Source)  │
//! │              │  │ out to subs  │  │ disposed     │  │  -> R       │
//! └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘
//!
//! Every subscribing `emit` call:
//!   1. wraps the sink in a subscription guard (state machine below),
//!   2. attaches it to the source (producer runs synchronously),
//!   3. returns a Disposable sharing the subscription's token.
//! ```
//!
//! ### Subscription lifecycle
//! ```text
//! {Active} ──(element arrives)──► {Active}
//! {Active} ──(graceful end)────► {Completed} ──(always)──► {Disposed}
//! {Active} ──(dispose called)──► {Disposed}
//!
//! - elements are delivered in emission order, on the emitting thread
//! - `completed` handler: at most once, graceful end only
//! - `disposed` handler: exactly once, any termination path
//! - {Disposed} is terminal; repeated dispose() calls are no-ops
//! ```
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits             |
//! |-------------------|----------------------------------------------------------------------|--------------------------------|
//! | **Signals**       | Error-free push sequences with eager, independent subscriptions.     | [`Signal`], [`Source`]         |
//! | **Observers**     | Sink trait and callback bundles for consuming elements.              | [`Observer`], [`Callbacks`]    |
//! | **Relays**        | Hot broadcast sinks, with or without latest-value replay.            | [`Relay`], [`BehaviorRelay`]   |
//! | **Disposal**      | Idempotent cancellation handles and scope-tied aggregation.          | [`Disposable`], [`DisposeBag`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use signalcast::{Callbacks, DisposeBag, Relay, Signal};
//!
//! // Hot path: a relay fans values out to its subscribers.
//! let relay = Relay::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let bag = DisposeBag::new();
//!
//! let sink = Arc::clone(&seen);
//! bag.insert(relay.to_signal().emit_next(move |v: i32| {
//!     sink.lock().unwrap().push(v);
//! }));
//!
//! relay.accept(1);
//! relay.accept(2);
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//!
//! // Cold path: a finite sequence completes, then the subscription disposes itself.
//! let signal = Signal::from_iter(["a", "b"]);
//! let sub = signal.emit(
//!     Callbacks::new()
//!         .with_next(|s| println!("next: {s}"))
//!         .with_completed(|| println!("completed"))
//!         .with_disposed(|| println!("disposed")),
//! );
//! assert!(sub.is_disposed());
//! ```

mod disposables;
mod observers;
mod relays;
mod signals;

// ---- Public re-exports ----

pub use disposables::{Disposable, DisposeBag};
pub use observers::{Callbacks, Observer, ObserverRef};
pub use relays::{BehaviorRelay, Relay};
pub use signals::{Signal, Source};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
