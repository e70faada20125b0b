//! Debouncing a burst of calls on the tokio runtime.
//!
//! Simulates an autosave: every keystroke calls the debounced function, but
//! only the text present 200ms after the last keystroke is saved. Scheduling
//! and supersession events are printed by the tracing subscriber.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use utilkit::debounce;

#[cfg(feature = "async")]
#[tokio::main]
async fn main() {
    run_example().await;
}

#[cfg(not(feature = "async"))]
fn main() {
    println!("This example requires the 'async' feature to be enabled.");
    println!("Run with: cargo run --example debounce --features async");
}

#[cfg(feature = "async")]
async fn run_example() {
    // Show the crate's TRACE and DEBUG events
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(LevelFilter::TRACE))
        .init();

    println!("=== Debounce Example ===\n");
    println!("Delay: 200ms. Only the last call of a burst runs.\n");

    let saves = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&saves);
    let autosave = debounce(
        move |text: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            println!("  -> saved {:?}", text);
        },
        Duration::from_millis(200),
    )
    .expect("running inside a tokio runtime");

    println!("Typing \"hello\" one key every 50ms:");
    let mut text = String::new();
    for ch in "hello".chars() {
        text.push(ch);
        println!("  call({:?})", text);
        autosave.call(text.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    println!("Pending after the burst: {}", autosave.is_pending());

    tokio::time::sleep(Duration::from_millis(300)).await;
    println!("Saves so far: {}\n", saves.load(Ordering::SeqCst));

    // A pause longer than the delay separates bursts
    println!("Typing \", world\" after a pause:");
    autosave.call("hello, world".to_string());
    tokio::time::sleep(Duration::from_millis(300)).await;

    let snapshot = autosave.metrics().snapshot();
    println!("\n=== Metrics ===");
    println!("Invocations:     {}", snapshot.invocations);
    println!("Superseded:      {}", snapshot.superseded);
    println!("Executed:        {}", snapshot.executed);
    println!("Stale dropped:   {}", snapshot.stale_dropped);
    println!("Coalescing ratio: {:.2}", snapshot.coalescing_ratio());

    println!("\n=== Example Complete ===");
}
