//! Signals: the error-free sequence abstraction and the `emit` adapters.
//!
//! This module groups the sequence **data model** and the **subscription
//! machinery** used to attach sinks to it.
//!
//! ## Contents
//! - [`Signal`] — the public sequence type and its constructors
//! - [`Source`] — the raw multicast stream representation underneath
//! - `subscription` — internal per-emit state machine (`Active →
//!   Completed → Disposed`)
//! - `emit` — the adapter family routing elements to observers, relays,
//!   custom sinks, and callback sets
//!
//! ## Quick reference
//! - **Producers**: [`Signal::new`] (subscription function),
//!   [`Relay::to_signal`](crate::Relay::to_signal), and the cold
//!   constructors ([`Signal::just`], [`Signal::from_iter`], ...).
//! - **Consumers**: the `emit` family on [`Signal`]; see the module docs in
//!   `emit.rs` for the full table.

mod emit;
mod signal;
mod source;
mod subscription;

pub use signal::Signal;
pub use source::Source;
