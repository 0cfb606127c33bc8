//! Crossover search for the hybrid sort threshold.
//!
//! Walks a doubling sequence of sizes and stops at the first size where merge sort,
//! averaged over a sorted and a reverse-sorted input, is strictly faster than
//! insertion sort. This is a single heuristic pass over noisy timings, not a root
//! finder: two runs on the same machine can disagree.

use crate::config::SearchRange;
use crate::experiment::InputShape;
use crate::timer::{as_millis_f64, Algorithm, Timer};
use tracing::{debug, info, warn};

/// Averaged timings of insertion and merge sort at one candidate size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub size: usize,
    /// Mean of the sorted and reverse-sorted insertion sort timings (ms)
    pub insertion_ms: f64,
    /// Mean of the sorted and reverse-sorted merge sort timings (ms)
    pub merge_ms: f64,
}

impl Probe {
    /// Whether merge sort beat insertion sort. Ties go to insertion sort.
    pub fn merge_wins(&self) -> bool {
        self.merge_ms < self.insertion_ms
    }
}

/// Times insertion and merge sort on canonical sorted and reverse-sorted inputs of
/// length `size`. Every call gets its own copy of the input.
pub fn probe<T: Timer>(size: usize, timer: &mut T) -> Probe {
    let sorted = InputShape::Sorted.generate(size);
    let reverse = InputShape::Reverse.generate(size);

    let mut average = |algorithm: Algorithm| {
        let on_sorted = as_millis_f64(timer.time(algorithm, sorted.clone(), 0));
        let on_reverse = as_millis_f64(timer.time(algorithm, reverse.clone(), 0));
        (on_sorted + on_reverse) / 2.0
    };

    let insertion_ms = average(Algorithm::Insertion);
    let merge_ms = average(Algorithm::Merge);

    Probe {
        size,
        insertion_ms,
        merge_ms,
    }
}

/// Finds the smallest candidate size at which merge sort outperforms insertion sort.
///
/// Returns `0` when no candidate in `range` shows a crossover, which makes the hybrid
/// sort degenerate to plain merge sort.
pub fn find_threshold<T: Timer>(range: &SearchRange, timer: &mut T) -> usize {
    for size in range.sizes() {
        let probe = probe(size, timer);
        debug!(
            size,
            insertion_ms = probe.insertion_ms,
            merge_ms = probe.merge_ms,
            "crossover probe"
        );
        if probe.merge_wins() {
            info!(threshold = size, "crossover found");
            return size;
        }
    }

    warn!(
        start = range.start,
        limit = range.limit,
        "no crossover in search range, hybrid sort falls back to merge sort"
    );
    0
}
