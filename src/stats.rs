//! Descriptive statistics over a sample series.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Most frequent exact value. Timings rarely repeat bit-for-bit, so this is
    /// usually just the first sample.
    pub mode: f64,
    /// Population standard deviation (divides by n)
    pub std_dev: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={:.4} min={:.4} max={:.4} mode={:.4} sd={:.4}",
            self.mean, self.min, self.max, self.mode, self.std_dev
        )
    }
}

pub fn calculate_stats(values: &[f64]) -> Result<Statistics> {
    if values.is_empty() {
        return Err(Error::EmptySeries);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(Statistics {
        mean,
        min,
        max,
        mode: mode(values),
        std_dev: variance.sqrt(),
    })
}

/// Most frequent value by exact bit pattern; ties go to the earliest occurrence.
fn mode(values: &[f64]) -> f64 {
    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(values.len());
    for v in values {
        *counts.entry(v.to_bits()).or_insert(0) += 1;
    }

    let mut best = values[0];
    let mut best_count = 0;
    for &v in values {
        let count = counts[&v.to_bits()];
        if count > best_count {
            best = v;
            best_count = count;
        }
    }
    best
}
