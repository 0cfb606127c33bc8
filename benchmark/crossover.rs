//! Crossover Stability Check
//!
//! Repeats the n0 search several times on the wall clock and reports how often each
//! threshold came out. A wide spread means the machine is too noisy for a single
//! search to be trusted.
//!
//! Run with: `cargo run --bin crossover --release`

use hybridsort::{find_threshold, probe, SearchRange, WallClock};
use std::collections::BTreeMap;
use tracing::info;

/// Number of independent threshold searches
const CROSSOVER_REPEATS: usize = 10;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("hybridsort=warn,crossover=info")
        .init();

    let range = SearchRange::default();
    let mut timer = WallClock;

    println!();
    println!("Crossover Stability");
    println!("===================");

    // Single annotated pass so the raw averages are visible
    println!();
    println!("┌────────────┬─────────────────┬─────────────────┬────────┐");
    println!("│    size    │ Insertion (ms)  │   Merge (ms)    │ Winner │");
    println!("├────────────┼─────────────────┼─────────────────┼────────┤");
    for size in range.sizes() {
        let p = probe(size, &mut timer);
        println!(
            "│ {:>10} │ {:>15.4} │ {:>15.4} │ {:>6} │",
            p.size,
            p.insertion_ms,
            p.merge_ms,
            if p.merge_wins() { "merge" } else { "ins" }
        );
    }
    println!("└────────────┴─────────────────┴─────────────────┴────────┘");

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for run in 1..=CROSSOVER_REPEATS {
        let threshold = find_threshold(&range, &mut timer);
        info!(run, threshold, "search finished");
        *counts.entry(threshold).or_insert(0) += 1;
    }

    println!();
    println!("n0 over {} searches (0 = no crossover):", CROSSOVER_REPEATS);
    for (threshold, count) in &counts {
        println!("  n0={:>6}: {:>3}x", threshold, count);
    }

    Ok(())
}
