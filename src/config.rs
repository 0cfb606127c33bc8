//! Experiment parameters.
//!
//! Nothing here is read from the command line, the environment, or disk. The
//! defaults are the constants the benchmark has always used.

use crate::error::{Error, Result};

/// Array length for the benchmark inputs
const ARRAY_LEN: usize = 100_000;

/// Rounds per input shape
const ROUNDS: usize = 100;

/// First candidate size of the crossover search
const SEARCH_START: usize = 10;

/// Largest candidate size the crossover search may probe
const SEARCH_LIMIT: usize = 10_000;

/// Doubling sequence of candidate sizes probed by the threshold finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    /// First size probed
    pub start: usize,
    /// Inclusive upper bound on probed sizes
    pub limit: usize,
}

impl Default for SearchRange {
    fn default() -> Self {
        SearchRange {
            start: SEARCH_START,
            limit: SEARCH_LIMIT,
        }
    }
}

impl SearchRange {
    /// Candidate sizes `start, 2*start, 4*start, ...` up to and including `limit`.
    ///
    /// Yields nothing when `start` is zero.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let limit = self.limit;
        std::iter::successors(Some(self.start).filter(|&s| s > 0), |&s| s.checked_mul(2))
            .take_while(move |&s| s <= limit)
    }
}

/// Configuration shared by the threshold finder and the experiment runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Timed rounds per input shape
    pub rounds: usize,
    /// Length of the sorted and reverse-sorted benchmark inputs
    pub array_len: usize,
    /// Crossover search range
    pub search: SearchRange,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            rounds: ROUNDS,
            array_len: ARRAY_LEN,
            search: SearchRange::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::InvalidConfig("rounds must be at least 1".into()));
        }
        if self.search.start == 0 {
            return Err(Error::InvalidConfig(
                "search start must be positive, a doubling search from 0 never advances".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_benchmark_constants() {
        let config = ExperimentConfig::default();
        assert_eq!(config.rounds, 100);
        assert_eq!(config.array_len, 100_000);
        assert_eq!(config.search, SearchRange { start: 10, limit: 10_000 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_search_sizes() {
        let sizes: Vec<usize> = SearchRange::default().sizes().collect();
        assert_eq!(sizes, vec![10, 20, 40, 80, 160, 320, 640, 1280, 2560, 5120]);
    }

    #[test]
    fn test_search_sizes_inclusive_limit() {
        let sizes: Vec<usize> = SearchRange { start: 5, limit: 40 }.sizes().collect();
        assert_eq!(sizes, vec![5, 10, 20, 40]);
    }

    #[test]
    fn test_search_sizes_empty() {
        assert_eq!(SearchRange { start: 0, limit: 100 }.sizes().count(), 0);
        assert_eq!(SearchRange { start: 50, limit: 10 }.sizes().count(), 0);
    }

    #[test]
    fn test_search_sizes_stop_before_overflow() {
        let range = SearchRange {
            start: usize::MAX / 2 + 1,
            limit: usize::MAX,
        };
        assert_eq!(range.sizes().count(), 1);
    }

    #[test]
    fn test_validate_rejects_zero_rounds() {
        let config = ExperimentConfig {
            rounds: 0,
            ..ExperimentConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_search_start() {
        let config = ExperimentConfig {
            search: SearchRange { start: 0, limit: 10 },
            ..ExperimentConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
