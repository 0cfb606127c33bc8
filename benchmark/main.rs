//! HybridSort Benchmark
//!
//! Run with: `cargo run --bin benchmark --release`
//!
//! 1. Searches for the crossover length n0 where merge sort overtakes insertion sort.
//! 2. Times insertion, merge and hybrid sort over repeated rounds on a sorted and a
//!    reverse-sorted array.
//! 3. Writes every raw timing to a CSV sheet and prints per-algorithm statistics.
//!
//! There are no flags: every parameter comes from `ExperimentConfig::default()`.

mod summary;

use crate::summary::{format_number, print_summary, summarize};
use anyhow::Context;
use hybridsort::{
    export_csv, find_threshold, run_all, BarProgress, ExperimentConfig, WallClock, REPORT_PATH,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("hybridsort=info,benchmark=info")
        .init();

    let config = ExperimentConfig::default();
    config.validate().context("invalid experiment configuration")?;

    println!();
    println!("HybridSort Benchmark");
    println!("====================");

    let mut timer = WallClock;

    let threshold = find_threshold(&config.search, &mut timer);
    info!(threshold, "using crossover threshold");

    let results = run_all(&config, threshold, &mut timer, |shape| {
        BarProgress::new(format!("{:<13}", shape.label()))
    });

    export_csv(&results, REPORT_PATH)
        .with_context(|| format!("failed to export report to {}", REPORT_PATH))?;

    let summary = summarize(&results).context("failed to aggregate timings")?;
    print_summary(&summary, threshold, config.array_len);

    println!();
    println!(
        "Done! {} rounds x {} elements, raw timings in {}",
        config.rounds,
        format_number(config.array_len),
        REPORT_PATH
    );
    Ok(())
}
