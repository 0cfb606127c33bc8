//! Timing seam between the sorters and everything that measures them.
//!
//! The threshold search and the experiment runner never read a clock directly. They
//! ask a [`Timer`] how long a sorter took, so tests can swap the wall clock for a
//! deterministic [`CostModel`].

use crate::sorts::{hybrid_sort, insertion_sort, merge_sort};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// The sorters under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Merge,
    Hybrid,
}

impl Algorithm {
    /// Every algorithm, in report column order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Insertion, Algorithm::Merge, Algorithm::Hybrid];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Hybrid => "Hybrid Sort",
        }
    }

    /// Sorts `input` with this algorithm. `threshold` only affects [`Algorithm::Hybrid`].
    pub fn sort(self, mut input: Vec<i32>, threshold: usize) -> Vec<i32> {
        match self {
            Algorithm::Insertion => {
                insertion_sort(&mut input);
                input
            }
            Algorithm::Merge => merge_sort(&input),
            Algorithm::Hybrid => hybrid_sort(&input, threshold),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measures one sorter invocation.
///
/// `input` is consumed: callers pass a fresh copy per call so no run ever sees
/// another run's output.
pub trait Timer {
    fn time(&mut self, algorithm: Algorithm, input: Vec<i32>, threshold: usize) -> Duration;
}

/// Monotonic wall-clock timer. The only [`Timer`] that actually sorts.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Timer for WallClock {
    fn time(&mut self, algorithm: Algorithm, input: Vec<i32>, threshold: usize) -> Duration {
        let start = Instant::now();
        let sorted = algorithm.sort(black_box(input), threshold);
        let elapsed = start.elapsed();
        drop(black_box(sorted));
        elapsed
    }
}

/// Deterministic timer reporting a caller-supplied cost instead of measuring.
///
/// The cost function sees the algorithm and the exact input it would have sorted.
///
/// ```
/// use hybridsort::{Algorithm, CostModel, Timer};
/// use std::time::Duration;
///
/// let mut timer = CostModel::new(|_, input: &[i32]| Duration::from_nanos(input.len() as u64));
/// assert_eq!(timer.time(Algorithm::Merge, vec![3, 2, 1], 0), Duration::from_nanos(3));
/// ```
pub struct CostModel<F> {
    cost: F,
}

impl<F> CostModel<F>
where
    F: FnMut(Algorithm, &[i32]) -> Duration,
{
    pub fn new(cost: F) -> Self {
        CostModel { cost }
    }
}

impl<F> Timer for CostModel<F>
where
    F: FnMut(Algorithm, &[i32]) -> Duration,
{
    fn time(&mut self, algorithm: Algorithm, input: Vec<i32>, _threshold: usize) -> Duration {
        (self.cost)(algorithm, &input)
    }
}

/// Converts a measured duration to the millisecond samples used throughout reporting.
#[inline]
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
