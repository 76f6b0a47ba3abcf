//! # Example: collector
//!
//! Demonstrates the `emit` adapter family on a cold signal.
//!
//! Shows how to:
//! - Build a finite [`Signal`] with `Signal::from_iter`.
//! - Subscribe with a [`Callbacks`] handler set (next/completed/disposed).
//! - Hand the raw stream to a custom sink via `emit_with`.
//! - Tie subscription lifetimes to a scope with [`DisposeBag`].
//!
//! ## Flow
//! ```text
//! Signal::from_iter([1..=5])
//!     ├─► emit(Callbacks)  ──► collect into Vec, then completed/disposed
//!     └─► emit_with(|source| ...) ──► custom sink decides how to attach
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example collector
//! ```

use std::sync::{Arc, Mutex};

use signalcast::{Callbacks, DisposeBag, Signal, Source};

fn main() {
    let bag = DisposeBag::new();
    let signal = Signal::from_iter(1..=5);

    // Callback-triple subscription: next / completed / disposed.
    let collected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&collected);
    bag.insert(signal.emit(
        Callbacks::new()
            .with_next(move |v: i32| sink.lock().unwrap().push(v))
            .with_completed(|| println!("[collector] completed"))
            .with_disposed(|| println!("[collector] disposed")),
    ));
    println!("[collector] got {:?}", collected.lock().unwrap());

    // Custom sink: takes the raw Source and decides how to subscribe.
    let total = signal.emit_with(|source: Source<i32>| {
        let sum = Arc::new(Mutex::new(0));
        let s = Arc::clone(&sum);
        let sub = Signal::from_source(source).emit_next(move |v| *s.lock().unwrap() += v);
        sub.dispose();
        let total = *sum.lock().unwrap();
        total
    });
    println!("[collector] sum via custom sink = {total}");

    // Curried custom sink: stream first, configuration second.
    let scaled = signal.emit_with_arg(
        |source: Source<i32>| {
            move |factor: i32| {
                let sum = Arc::new(Mutex::new(0));
                let s = Arc::clone(&sum);
                let _sub = Signal::from_source(source).emit_next(move |v| *s.lock().unwrap() += v * factor);
                let scaled = *sum.lock().unwrap();
                scaled
            }
        },
        10,
    );
    println!("[collector] scaled sum = {scaled}");
}
