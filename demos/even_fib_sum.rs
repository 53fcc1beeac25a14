//! Even Fibonacci Sum
//!
//! This example drives the even Fibonacci generator with bound 50 and sums
//! what it emits.
//!
//! Key concepts:
//! - Protocol 1: step while the tag is not the terminal sentinel
//! - Protocol 2: step forever, break when a step reports `done`
//! - Checkpointing a half-driven record and finishing it elsewhere
//!
//! Run with: cargo run --example even_fib_sum

use resumable::checkpoint::Checkpoint;
use resumable::core::NoInput;
use resumable::generators::even_fib::{self, EvenFib, EvenFibParams};
use resumable::machine::Machine;

const BOUND: i64 = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Even Fibonacci below {} ===\n", BOUND);

    // Protocol 1
    let mut fib = even_fib::init(BOUND);
    let mut sum = 0;
    while fib.tag != even_fib::DONE {
        let output = even_fib::step(&mut fib, NoInput);
        if let Some(value) = output.value() {
            println!("  emitted {}", value);
            sum += value;
        }
    }
    println!("Protocol 1 sum: {}", sum);

    // Protocol 2
    let mut fib = even_fib::init(BOUND);
    let mut sum = 0;
    loop {
        let output = even_fib::step(&mut fib, NoInput);
        if output.valid() {
            sum += output.value().copied().unwrap_or_default();
        }
        if output.done() {
            break;
        }
    }
    println!("Protocol 2 sum: {}", sum);

    // Checkpoint halfway, resume from JSON
    let mut machine = Machine::new(EvenFib, EvenFibParams { bound: BOUND });
    let mut sum = 0;
    for _ in 0..5 {
        sum += machine.step(NoInput).value().copied().unwrap_or_default();
    }
    let json = machine.checkpoint().to_json()?;
    println!("\nCheckpoint after {} steps:\n  {}", machine.progress().steps, json);

    let mut resumed = Machine::restore(EvenFib, Checkpoint::from_json(&json)?)?;
    while !resumed.is_done() {
        sum += resumed.step(NoInput).value().copied().unwrap_or_default();
    }
    println!("Resumed sum: {} after {} steps", sum, resumed.progress().steps);

    Ok(())
}
