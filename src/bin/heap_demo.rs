//! Walks a bounded min-heap through a fill-then-drain cycle, printing the
//! buffer after every step.
//!
//! ```bash
//! heap_demo                          # capacity 9, inserts 8, 7, ..., 0
//! heap_demo --capacity 4 5 3 9 1 7   # 7 is rejected, the heap is full
//! heap_demo --top-k 2 5 3 9 1 7      # also prints the two largest inputs
//! RUST_LOG=trace heap_demo -v --capacity 2 1 2 3
//! ```

use std::process::ExitCode;

use argh::FromArgs;
use log::{debug, error, info, warn};

use rust_bounded_heaps::bounded_binary::BoundedMinHeap;
use rust_bounded_heaps::top_k::top_k;

const DEFAULT_CAPACITY: usize = 9;

#[derive(FromArgs, Debug, PartialEq)]
/// Fill a bounded min-heap, then pop it until empty.
struct Arguments {
    /// heap capacity (default 9)
    #[argh(option, short = 'c', default = "DEFAULT_CAPACITY")]
    capacity: usize,

    /// also print the K largest inputs
    #[argh(option)]
    top_k: Option<usize>,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// values to insert, in order (default: capacity-1 down to 0)
    #[argh(positional)]
    values: Vec<i64>,
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.parse_default_env();
    log_builder.init();
    debug!("arguments: {args:#?}");

    if args.capacity == 0 {
        error!("--capacity must be positive");
        return ExitCode::from(2);
    }
    if args.top_k == Some(0) {
        error!("--top-k must be positive");
        return ExitCode::from(2);
    }

    let values: Vec<i64> = if args.values.is_empty() {
        (0..args.capacity as i64).rev().collect()
    } else {
        args.values
    };

    let mut heap = BoundedMinHeap::new(args.capacity);
    for &value in &values {
        if heap.push(value) {
            println!("push {value} -> {heap}");
        } else {
            warn!("heap is full (capacity {}), dropped {value}", heap.capacity());
            println!("push {value} rejected, heap full -> {heap}");
        }
    }

    let mut drained = 0;
    while !heap.is_empty() {
        let before = heap.to_string();
        match heap.pop() {
            Ok(min) => {
                drained += 1;
                println!("{before} -> pop: {min} -> {heap}, size: {}", heap.len());
            }
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
    info!("drained {drained} of {} values", values.len());

    match heap.pop() {
        Ok(unexpected) => {
            error!("pop on a drained heap returned {unexpected}");
            return ExitCode::FAILURE;
        }
        Err(err) => println!("{heap} -> pop: {err}"),
    }

    if let Some(k) = args.top_k {
        let largest = top_k(values.iter().copied(), k);
        println!("top {k}: {largest:?}");
    }

    ExitCode::SUCCESS
}
