//! # The `emit` family: attaching sinks to a signal.
//!
//! Every subscription starts here. The adapters route a signal's elements
//! toward an [`Observer`](crate::Observer), a [`Relay`](crate::Relay), a
//! custom sink function, or a plain callback set:
//!
//! | Adapter | Sink | Returns |
//! |---|---|---|
//! | [`Signal::emit_to`] | `ObserverRef<E>` | [`Disposable`] |
//! | [`Signal::emit_to_optional`] | `ObserverRef<Option<E>>` | [`Disposable`] |
//! | [`Signal::emit_to_relay`] | `&Relay<E>` | [`Disposable`] |
//! | [`Signal::emit_to_optional_relay`] | `&Relay<Option<E>>` | [`Disposable`] |
//! | [`Signal::emit_with`] | `FnOnce(Source<E>) -> R` | `R` |
//! | [`Signal::emit_with_arg`] | curried sink function | `R2` |
//! | [`Signal::emit`] | [`Callbacks`] | [`Disposable`] |
//! | [`Signal::emit_next`] | element closure | [`Disposable`] |
//!
//! All subscribing adapters are eager: the producer runs synchronously
//! inside the call, so elements may already have been delivered by the time
//! the `Disposable` is returned. The two `emit_with` forms create no
//! subscription at all — they hand the raw [`Source`] to the sink function.

use std::sync::Arc;

use crate::disposables::Disposable;
use crate::observers::{Callbacks, ObserverRef};
use crate::relays::Relay;

use super::signal::Signal;
use super::source::Source;
use super::subscription::Subscription;

impl<E: 'static> Signal<E> {
    /// Creates a subscription and sends elements to `observer`.
    ///
    /// Equivalent to subscribing directly, but communicates intent better.
    /// The observer receives every element in emission order plus the
    /// completion notification; it is held only for the duration of the
    /// subscription.
    pub fn emit_to(&self, observer: ObserverRef<E>) -> Disposable {
        let next = Arc::clone(&observer);
        self.emit(
            Callbacks::new()
                .with_next(move |element| next.on_next(element))
                .with_completed(move || observer.on_completed()),
        )
    }

    /// Creates a subscription sending elements to an optional-typed observer.
    ///
    /// Every element `x` is wrapped as `Some(x)` before forwarding, letting
    /// an `Option<E>`-typed observer consume a non-optional stream. The
    /// observer never receives `None`.
    pub fn emit_to_optional(&self, observer: ObserverRef<Option<E>>) -> Disposable {
        let next = Arc::clone(&observer);
        self.emit(
            Callbacks::new()
                .with_next(move |element| next.on_next(Some(element)))
                .with_completed(move || observer.on_completed()),
        )
    }

    /// Creates a subscription pushing elements into `relay`.
    ///
    /// Every element is forwarded into [`Relay::accept`] synchronously on
    /// the emitting thread - no buffering or backpressure is introduced.
    /// The relay does not own the signal: disposing the returned handle
    /// detaches the feed without affecting the relay's own subscribers.
    pub fn emit_to_relay(&self, relay: &Relay<E>) -> Disposable
    where
        E: Clone,
    {
        let relay = relay.clone();
        self.emit(Callbacks::new().with_next(move |element| relay.accept(element)))
    }

    /// Creates a subscription pushing elements into an optional-typed relay.
    ///
    /// Same wrapping rule as [`Signal::emit_to_optional`]: each element `x`
    /// enters the relay as `Some(x)`.
    pub fn emit_to_optional_relay(&self, relay: &Relay<Option<E>>) -> Disposable
    where
        E: Clone,
    {
        let relay = relay.clone();
        self.emit(Callbacks::new().with_next(move |element| relay.accept(Some(element))))
    }

    /// Hands the raw multicast stream to a custom sink function.
    ///
    /// No subscription is created here; `emitter` receives a clone of the
    /// underlying [`Source`] and decides how (or whether) to attach. The
    /// return value is whatever the function returns - commonly, but not
    /// necessarily, a [`Disposable`].
    pub fn emit_with<R>(&self, emitter: impl FnOnce(Source<E>) -> R) -> R {
        emitter(self.source.clone())
    }

    /// Curried form of [`Signal::emit_with`].
    ///
    /// Applies `emitter` to the raw stream, then applies the resulting
    /// function to `arg`. Useful for sink protocols taking the stream first
    /// and configuration second.
    pub fn emit_with_arg<R1, R2, F, G>(&self, emitter: F, arg: R1) -> R2
    where
        F: FnOnce(Source<E>) -> G,
        G: FnOnce(R1) -> R2,
    {
        emitter(self.source.clone())(arg)
    }

    /// Creates a subscription driven by a [`Callbacks`] handler set.
    ///
    /// Guarantees, per subscription:
    /// - `next` runs once per element, in emission order, only while active;
    /// - `completed` runs at most once, only on graceful termination;
    /// - `disposed` runs exactly once, on any termination, and strictly
    ///   after `completed` when the sequence completes gracefully.
    ///
    /// Subscribes eagerly: the producer runs before this returns.
    pub fn emit(&self, callbacks: Callbacks<E>) -> Disposable {
        let subscription = Subscription::new(callbacks);
        let observer: ObserverRef<E> = subscription.clone();
        let upstream = self.source.attach(observer);
        subscription.set_upstream(upstream);
        subscription.handle()
    }

    /// Shorthand for [`Signal::emit`] with only a `next` handler.
    pub fn emit_next(&self, on_next: impl Fn(E) + Send + Sync + 'static) -> Disposable {
        self.emit(Callbacks::new().with_next(on_next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Observer;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every notification with a sequence tag, to assert ordering.
    struct Trace {
        log: Mutex<Vec<String>>,
    }

    impl Trace {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                log: Mutex::new(Vec::new()),
            })
        }

        fn push(&self, entry: impl Into<String>) {
            self.log.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_emit_next_preserves_order_and_content() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let _sub = Signal::from_iter([1, 2, 3]).emit_next(move |v| sink.lock().unwrap().push(v));
        assert_eq!(seen.lock().unwrap().clone(), vec![1, 2, 3]);
    }

    #[test]
    fn test_completed_then_disposed_ordering() {
        let trace = Trace::new();
        let next = Arc::clone(&trace);
        let done = Arc::clone(&trace);
        let gone = Arc::clone(&trace);

        let sub = Signal::from_iter([1, 2, 3]).emit(
            Callbacks::new()
                .with_next(move |v: i32| next.push(format!("next:{v}")))
                .with_completed(move || done.push("completed"))
                .with_disposed(move || gone.push("disposed")),
        );

        assert_eq!(
            trace.entries(),
            vec!["next:1", "next:2", "next:3", "completed", "disposed"],
            "completion must be observed strictly before disposal"
        );
        assert!(sub.is_disposed(), "graceful completion terminates the subscription");
    }

    #[test]
    fn test_disposed_fires_exactly_once_on_external_dispose() {
        let completed = Arc::new(AtomicUsize::new(0));
        let disposed = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&completed);
        let d = Arc::clone(&disposed);
        let sub = Signal::<i32>::never().emit(
            Callbacks::new()
                .with_completed(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                })
                .with_disposed(move || {
                    d.fetch_add(1, Ordering::SeqCst);
                }),
        );

        sub.dispose();
        sub.dispose();

        assert_eq!(completed.load(Ordering::SeqCst), 0, "external dispose is not completion");
        assert_eq!(disposed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispose_before_any_emission() {
        let relay = Relay::new();
        let trace = Trace::new();
        let next = Arc::clone(&trace);
        let done = Arc::clone(&trace);
        let gone = Arc::clone(&trace);

        let sub = relay.to_signal().emit(
            Callbacks::new()
                .with_next(move |v: i32| next.push(format!("next:{v}")))
                .with_completed(move || done.push("completed"))
                .with_disposed(move || gone.push("disposed")),
        );

        sub.dispose();
        relay.accept(1);

        assert_eq!(trace.entries(), vec!["disposed"], "only the disposed handler may fire");
    }

    #[test]
    fn test_mid_stream_dispose_stops_delivery() {
        let relay = Relay::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let other = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let sub = relay.to_signal().emit_next(move |v| sink.lock().unwrap().push(v));
        let sink = Arc::clone(&other);
        let _rest = relay.to_signal().emit_next(move |v| sink.lock().unwrap().push(v));

        relay.accept(1);
        relay.accept(2);
        sub.dispose();
        relay.accept(3);

        assert_eq!(seen.lock().unwrap().clone(), vec![1, 2]);
        assert_eq!(
            other.lock().unwrap().clone(),
            vec![1, 2, 3],
            "other subscriptions keep receiving"
        );
    }

    #[test]
    fn test_emit_to_observer_receives_elements_and_completion() {
        struct Probe {
            seen: Mutex<Vec<i32>>,
            completed: AtomicUsize,
        }

        impl Observer<i32> for Probe {
            fn on_next(&self, element: i32) {
                self.seen.lock().unwrap().push(element);
            }

            fn on_completed(&self) {
                self.completed.fetch_add(1, Ordering::SeqCst);
            }
        }

        let probe = Arc::new(Probe {
            seen: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
        });

        let _sub = Signal::from_iter([4, 5]).emit_to(probe.clone());
        assert_eq!(probe.seen.lock().unwrap().clone(), vec![4, 5]);
        assert_eq!(probe.completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_emit_to_optional_wraps_every_element() {
        struct OptProbe {
            seen: Mutex<Vec<Option<i32>>>,
        }

        impl Observer<Option<i32>> for OptProbe {
            fn on_next(&self, element: Option<i32>) {
                self.seen.lock().unwrap().push(element);
            }
        }

        let probe = Arc::new(OptProbe {
            seen: Mutex::new(Vec::new()),
        });

        let _sub = Signal::from_iter([1, 2]).emit_to_optional(probe.clone());
        assert_eq!(
            probe.seen.lock().unwrap().clone(),
            vec![Some(1), Some(2)],
            "elements must arrive present-wrapped, never bare or None"
        );
    }

    #[test]
    fn test_emit_to_relay_rebroadcasts_in_order() {
        let relay = Relay::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _tap = relay.to_signal().emit_next(move |v: &str| sink.lock().unwrap().push(v));

        let _feed = Signal::from_iter(["a", "b"]).emit_to_relay(&relay);
        assert_eq!(seen.lock().unwrap().clone(), vec!["a", "b"]);
    }

    #[test]
    fn test_emit_to_optional_relay_wraps_elements() {
        let relay: Relay<Option<i32>> = Relay::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _tap = relay.to_signal().emit_next(move |v| sink.lock().unwrap().push(v));

        let _feed = Signal::from_iter([7]).emit_to_optional_relay(&relay);
        assert_eq!(seen.lock().unwrap().clone(), vec![Some(7)]);
    }

    #[test]
    fn test_disposing_relay_feed_leaves_relay_subscribers() {
        let upstream = Relay::new();
        let downstream = Relay::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _tap = downstream
            .to_signal()
            .emit_next(move |v| sink.lock().unwrap().push(v));

        let feed = upstream.to_signal().emit_to_relay(&downstream);
        upstream.accept(1);
        feed.dispose();
        upstream.accept(2);
        downstream.accept(3); // the relay itself still works

        assert_eq!(seen.lock().unwrap().clone(), vec![1, 3]);
        assert_eq!(downstream.len(), 1);
    }

    #[test]
    fn test_emit_with_creates_no_subscription() {
        let attached = Arc::new(AtomicUsize::new(0));
        let a = Arc::clone(&attached);
        let signal = Signal::new(move |observer: ObserverRef<i32>| {
            a.fetch_add(1, Ordering::SeqCst);
            observer.on_completed();
            Disposable::noop()
        });

        let answer = signal.emit_with(|_source| 42);
        assert_eq!(answer, 42, "emit_with returns the emitter's value");
        assert_eq!(attached.load(Ordering::SeqCst), 0, "no subscription may be created");
    }

    #[test]
    fn test_emit_with_can_attach_through_the_source() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let _sub = Signal::from_iter([9, 10]).emit_with(move |source| {
            let signal = Signal::from_source(source);
            signal.emit_next(move |v| sink.lock().unwrap().push(v))
        });
        assert_eq!(seen.lock().unwrap().clone(), vec![9, 10]);
    }

    #[test]
    fn test_emit_with_arg_applies_curried_argument() {
        let signal = Signal::from_iter([1, 2, 3]);
        let sum = signal.emit_with_arg(
            |source| {
                move |offset: i32| {
                    let total = Arc::new(AtomicUsize::new(offset as usize));
                    let t = Arc::clone(&total);
                    let signal = Signal::from_source(source);
                    let _sub = signal.emit_next(move |v: i32| {
                        t.fetch_add(v as usize, Ordering::SeqCst);
                    });
                    total.load(Ordering::SeqCst)
                }
            },
            100,
        );
        assert_eq!(sum, 106);
    }

    #[test]
    fn test_dispose_from_another_thread_stops_delivery() {
        let relay = Relay::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = relay.to_signal().emit_next(move |v| sink.lock().unwrap().push(v));

        relay.accept(1);
        let remote = sub.clone();
        std::thread::spawn(move || remote.dispose())
            .join()
            .expect("dispose thread panicked");
        relay.accept(2);

        assert_eq!(seen.lock().unwrap().clone(), vec![1]);
        assert!(sub.is_disposed());
    }

    #[test]
    fn test_eager_subscription_delivers_before_returning() {
        // The producer emits synchronously inside emit(); by the time the
        // Disposable is in hand, everything has been observed.
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = Signal::just(1).emit_next(move |v| sink.lock().unwrap().push(v));

        assert!(sub.is_disposed());
        assert_eq!(seen.lock().unwrap().clone(), vec![1]);
    }

    #[test]
    fn test_producer_disposable_released_on_dispose() {
        let released = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&released);
        let signal = Signal::new(move |_observer: ObserverRef<i32>| {
            let r = Arc::clone(&r);
            Disposable::new(move || {
                r.fetch_add(1, Ordering::SeqCst);
            })
        });

        let sub = signal.emit_next(|_| {});
        assert_eq!(released.load(Ordering::SeqCst), 0);
        sub.dispose();
        assert_eq!(released.load(Ordering::SeqCst), 1, "upstream teardown must run");
    }

    #[test]
    fn test_producer_disposable_released_on_completion() {
        let released = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&released);
        let signal = Signal::new(move |observer: ObserverRef<i32>| {
            observer.on_next(1);
            observer.on_completed();
            let r = Arc::clone(&r);
            Disposable::new(move || {
                r.fetch_add(1, Ordering::SeqCst);
            })
        });

        let _sub = signal.emit_next(|_| {});
        assert_eq!(
            released.load(Ordering::SeqCst),
            1,
            "synchronous completion still releases the producer disposable"
        );
    }

    #[test]
    fn test_elements_after_completion_are_dropped() {
        let signal = Signal::new(|observer: ObserverRef<i32>| {
            observer.on_next(1);
            observer.on_completed();
            observer.on_next(2); // contract violation by the producer; gated out
            Disposable::noop()
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = signal.emit_next(move |v| sink.lock().unwrap().push(v));
        assert_eq!(seen.lock().unwrap().clone(), vec![1]);
    }

    #[test]
    fn test_completion_fires_at_most_once() {
        let signal = Signal::new(|observer: ObserverRef<i32>| {
            observer.on_completed();
            observer.on_completed();
            Disposable::noop()
        });

        let completed = Arc::new(AtomicUsize::new(0));
        let disposed = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&completed);
        let d = Arc::clone(&disposed);
        let _sub = signal.emit(
            Callbacks::new()
                .with_completed(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                })
                .with_disposed(move || {
                    d.fetch_add(1, Ordering::SeqCst);
                }),
        );

        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert_eq!(disposed.load(Ordering::SeqCst), 1);
    }
}
