//! Repeated timing of all three sorters on a fixed input.

use crate::config::ExperimentConfig;
use crate::progress::Progress;
use crate::timer::{as_millis_f64, Algorithm, Timer};
use std::fmt;
use std::time::Instant;
use tracing::info;

/// Order of the benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// `0, 1, ..., len - 1`
    Sorted,
    /// `len - 1, ..., 1, 0`
    Reverse,
}

impl InputShape {
    pub const ALL: [InputShape; 2] = [InputShape::Sorted, InputShape::Reverse];

    pub fn label(self) -> &'static str {
        match self {
            InputShape::Sorted => "Sorted Array",
            InputShape::Reverse => "Reverse Array",
        }
    }

    pub fn generate(self, len: usize) -> Vec<i32> {
        let len = len as i32;
        match self {
            InputShape::Sorted => (0..len).collect(),
            InputShape::Reverse => (0..len).rev().collect(),
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sample series (milliseconds per round) for each algorithm on one input shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub insertion: Vec<f64>,
    pub merge: Vec<f64>,
    pub hybrid: Vec<f64>,
}

impl SeriesSet {
    pub fn with_capacity(rounds: usize) -> Self {
        SeriesSet {
            insertion: Vec::with_capacity(rounds),
            merge: Vec::with_capacity(rounds),
            hybrid: Vec::with_capacity(rounds),
        }
    }

    pub fn series(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::Insertion => &self.insertion,
            Algorithm::Merge => &self.merge,
            Algorithm::Hybrid => &self.hybrid,
        }
    }

    fn series_mut(&mut self, algorithm: Algorithm) -> &mut Vec<f64> {
        match algorithm {
            Algorithm::Insertion => &mut self.insertion,
            Algorithm::Merge => &mut self.merge,
            Algorithm::Hybrid => &mut self.hybrid,
        }
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> usize {
        self.insertion.len()
    }
}

/// Every sample series of one run, keyed by input shape then algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsBundle {
    pub sorted: SeriesSet,
    pub reverse: SeriesSet,
}

impl ResultsBundle {
    pub fn shape(&self, shape: InputShape) -> &SeriesSet {
        match shape {
            InputShape::Sorted => &self.sorted,
            InputShape::Reverse => &self.reverse,
        }
    }
}

/// Times every algorithm on a fresh copy of `input`, `rounds` times.
///
/// Progress is reported after the three timings of each round, so reporting cost
/// never lands inside a measured duration. The remaining-time estimate comes from a
/// separate clock and only covers the rounds run so far.
pub fn run_experiment<T, P>(
    input: &[i32],
    threshold: usize,
    rounds: usize,
    timer: &mut T,
    progress: &mut P,
) -> SeriesSet
where
    T: Timer,
    P: Progress,
{
    let mut results = SeriesSet::with_capacity(rounds);
    progress.start(rounds);
    let started = Instant::now();

    for round in 1..=rounds {
        for algorithm in Algorithm::ALL {
            let elapsed = timer.time(algorithm, input.to_vec(), threshold);
            results.series_mut(algorithm).push(as_millis_f64(elapsed));
        }

        let elapsed_secs = started.elapsed().as_secs_f64();
        let eta_secs = elapsed_secs / round as f64 * (rounds - round) as f64;
        progress.advance(round, rounds, eta_secs);
    }

    progress.finish();
    results
}

/// Runs the experiment on the sorted input, then on the reverse-sorted input.
///
/// `make_progress` builds a fresh progress reporter per shape.
pub fn run_all<T, P, M>(
    config: &ExperimentConfig,
    threshold: usize,
    timer: &mut T,
    mut make_progress: M,
) -> ResultsBundle
where
    T: Timer,
    P: Progress,
    M: FnMut(InputShape) -> P,
{
    let mut bundle = ResultsBundle::default();

    for shape in InputShape::ALL {
        info!(
            shape = shape.label(),
            len = config.array_len,
            rounds = config.rounds,
            threshold,
            "running experiment"
        );
        let input = shape.generate(config.array_len);
        let mut progress = make_progress(shape);
        let series = run_experiment(&input, threshold, config.rounds, timer, &mut progress);
        match shape {
            InputShape::Sorted => bundle.sorted = series,
            InputShape::Reverse => bundle.reverse = series,
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchRange;
    use crate::progress::Silent;
    use crate::timer::{CostModel, WallClock};
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        started: Option<usize>,
        updates: Vec<(usize, usize, f64)>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn start(&mut self, total: usize) {
            self.started = Some(total);
        }

        fn advance(&mut self, round: usize, total: usize, eta_secs: f64) {
            self.updates.push((round, total, eta_secs));
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn fixed_costs(algorithm: Algorithm, _: &[i32]) -> Duration {
        match algorithm {
            Algorithm::Insertion => Duration::from_secs(3),
            Algorithm::Merge => Duration::from_secs(2),
            Algorithm::Hybrid => Duration::from_secs(1),
        }
    }

    #[test]
    fn test_generate_shapes() {
        assert_eq!(InputShape::Sorted.generate(5), vec![0, 1, 2, 3, 4]);
        assert_eq!(InputShape::Reverse.generate(5), vec![4, 3, 2, 1, 0]);
        assert!(InputShape::Reverse.generate(0).is_empty());
    }

    #[test]
    fn test_series_lengths_and_values() {
        let mut timer = CostModel::new(fixed_costs);
        let input = InputShape::Reverse.generate(16);
        let series = run_experiment(&input, 4, 7, &mut timer, &mut Silent);

        assert_eq!(series.rounds(), 7);
        assert_eq!(series.insertion, vec![3000.0; 7]);
        assert_eq!(series.merge, vec![2000.0; 7]);
        assert_eq!(series.hybrid, vec![1000.0; 7]);
        assert_eq!(series.series(Algorithm::Merge), &[2000.0; 7][..]);
    }

    #[test]
    fn test_every_call_gets_fresh_input() {
        let input = InputShape::Reverse.generate(32);
        let mut calls = Vec::new();
        {
            let mut timer = CostModel::new(|algorithm, seen: &[i32]| {
                calls.push(algorithm);
                assert_eq!(seen, &input[..]);
                Duration::ZERO
            });
            run_experiment(&input, 8, 5, &mut timer, &mut Silent);
        }
        assert_eq!(calls.len(), 15);
        assert_eq!(&calls[..3], &Algorithm::ALL[..]);
    }

    #[test]
    fn test_fresh_input_with_real_sorts() {
        // A real clock sorts for real; the next call must still see reversed data
        let input = InputShape::Reverse.generate(200);
        let series = run_experiment(&input, 16, 3, &mut WallClock, &mut Silent);
        assert_eq!(series.rounds(), 3);
        assert!(series.insertion.iter().all(|&t| t >= 0.0));
        assert_eq!(input, InputShape::Reverse.generate(200));
    }

    #[test]
    fn test_progress_reported_each_round() {
        let mut timer = CostModel::new(fixed_costs);
        let mut recorder = Recorder::default();
        run_experiment(&[1, 2, 3], 0, 4, &mut timer, &mut recorder);

        assert_eq!(recorder.started, Some(4));
        assert!(recorder.finished);
        let rounds: Vec<(usize, usize)> =
            recorder.updates.iter().map(|&(r, t, _)| (r, t)).collect();
        assert_eq!(rounds, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
        assert!(recorder.updates.iter().all(|&(_, _, eta)| eta >= 0.0));
        assert_eq!(recorder.updates.last().map(|u| u.2), Some(0.0));
    }

    #[test]
    fn test_run_all_covers_both_shapes() {
        let config = ExperimentConfig {
            rounds: 2,
            array_len: 8,
            search: SearchRange::default(),
        };
        let mut shapes_seen = Vec::new();
        let mut timer = CostModel::new(|algorithm, input: &[i32]| {
            let ascending = input.windows(2).all(|w| w[0] <= w[1]);
            let base = if ascending { 10 } else { 20 };
            fixed_costs(algorithm, input) + Duration::from_secs(base)
        });
        let bundle = run_all(&config, 4, &mut timer, |shape| {
            shapes_seen.push(shape);
            Silent
        });

        assert_eq!(shapes_seen, InputShape::ALL.to_vec());
        assert_eq!(bundle.sorted.insertion, vec![13_000.0, 13_000.0]);
        assert_eq!(bundle.reverse.hybrid, vec![21_000.0, 21_000.0]);
        assert_eq!(bundle.shape(InputShape::Reverse).merge, vec![22_000.0, 22_000.0]);
    }
}
