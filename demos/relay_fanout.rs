//! # Example: relay_fanout
//!
//! Demonstrates a hot relay fed from a producer thread, fanning out to
//! multiple subscribers.
//!
//! Shows how to:
//! - Broadcast values through a [`Relay`] from another thread.
//! - Consume the relay as a [`Signal`] (`to_signal` + `emit_next`).
//! - Attach the built-in [`LogObserver`] (feature `logging`).
//! - Detach one subscriber mid-stream without affecting the others.
//!
//! ## Flow
//! ```text
//! producer thread ──► relay.accept(n) ──► fan-out (synchronous, in order)
//!                                           ├─► LogObserver (stdout)
//!                                           └─► collector (Vec<i32>)
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogObserver`].
//! ```bash
//! cargo run --example relay_fanout --features logging
//! ```

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use signalcast::{LogObserver, Relay};

fn main() {
    let relay = Relay::new();

    // Subscriber 1: log every value to stdout.
    let log = relay.subscribe(Arc::new(LogObserver::new("ticks")));

    // Subscriber 2: collect values through the signal surface.
    let collected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&collected);
    let tap = relay
        .to_signal()
        .emit_next(move |v: i32| sink.lock().unwrap().push(v));

    // Producer thread: push a few ticks into the relay.
    let feed = relay.clone();
    let producer = thread::spawn(move || {
        for n in 1..=5 {
            feed.accept(n);
            thread::sleep(Duration::from_millis(50));
        }
    });
    producer.join().expect("producer thread panicked");

    // Drop the logger mid-stream; the collector keeps receiving.
    log.dispose();
    relay.accept(6);

    println!("[relay_fanout] collected = {:?}", collected.lock().unwrap());
    tap.dispose();
}
