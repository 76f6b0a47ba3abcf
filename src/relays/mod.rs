//! Hot broadcast sinks: relays and their subscriber registry.
//!
//! A relay is the producer-facing half of the crate: values pushed into
//! [`Relay::accept`] are rebroadcast synchronously to every subscriber.
//! Relays never terminate and never error; the only way to stop receiving
//! is to dispose the subscription.
//!
//! ## Contents
//! - [`Relay`] — hot multicast sink, no replay
//! - [`BehaviorRelay`] — hot multicast sink retaining its latest value
//!
//! ## Quick reference
//! - **Feed a relay from a signal**: [`Signal::emit_to_relay`](crate::Signal::emit_to_relay).
//!   The subscription `Disposable` is the only link; disposing it detaches
//!   the feed without touching the relay's own subscriber set.
//! - **Consume a relay as a signal**: [`Relay::to_signal`].

mod behavior;
mod relay;

pub use behavior::BehaviorRelay;
pub use relay::Relay;
