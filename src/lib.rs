//! HybridSort: finding where merge sort stops paying for itself.
//!
//! Merge sort wins asymptotically, but on short runs insertion sort's tiny constant
//! factors beat merge sort's recursion and allocation. This crate measures the
//! crossover length `n0` on the current machine, then benchmarks insertion sort,
//! merge sort, and a hybrid merge sort that hands runs of at most `n0` elements to
//! insertion sort.
//!
//! # Example
//!
//! ```
//! use hybridsort::{hybrid_sort, insertion_sort, merge_sort};
//!
//! let arr = vec![5, 3, 4, 1, 2];
//!
//! let mut by_insertion = arr.clone();
//! insertion_sort(&mut by_insertion);
//!
//! assert_eq!(by_insertion, vec![1, 2, 3, 4, 5]);
//! assert_eq!(merge_sort(&arr), vec![1, 2, 3, 4, 5]);
//! assert_eq!(hybrid_sort(&arr, 3), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! Measurements go through the [`Timer`] trait, so the threshold search can run
//! against a deterministic [`CostModel`]:
//!
//! ```
//! use hybridsort::{find_threshold, Algorithm, CostModel, SearchRange};
//! use std::time::Duration;
//!
//! let mut timer = CostModel::new(|algorithm, input: &[i32]| {
//!     let n = input.len() as u64;
//!     match algorithm {
//!         Algorithm::Insertion => Duration::from_nanos(n * n),
//!         _ => Duration::from_nanos(100 * n),
//!     }
//! });
//! // First size where n² > 100·n is 160
//! assert_eq!(find_threshold(&SearchRange::default(), &mut timer), 160);
//! ```

pub mod config;
pub mod error;
pub mod experiment;
pub mod progress;
pub mod report;
pub mod sorts;
pub mod stats;
pub mod threshold;
pub mod timer;

pub use config::{ExperimentConfig, SearchRange};
pub use error::{Error, Result};
pub use experiment::{run_all, run_experiment, InputShape, ResultsBundle, SeriesSet};
pub use progress::{BarProgress, Progress, Silent};
pub use report::{export_csv, render_csv, REPORT_PATH};
pub use sorts::{
    hybrid_sort, hybrid_sort_by, insertion_sort, insertion_sort_by, merge_sort, merge_sort_by,
};
pub use stats::{calculate_stats, Statistics};
pub use threshold::{find_threshold, probe, Probe};
pub use timer::{Algorithm, CostModel, Timer, WallClock};
