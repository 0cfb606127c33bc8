use hybridsort::{calculate_stats, Algorithm, InputShape, ResultsBundle, Statistics};

// ============================================================================
// OUTPUT HELPERS
// ============================================================================

pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        format!("{}", n)
    }
}

// ============================================================================
// STATISTICS TABLES
// ============================================================================

/// Aggregates every series in the bundle, in shape then algorithm order.
pub fn summarize(
    results: &ResultsBundle,
) -> hybridsort::Result<Vec<(InputShape, Vec<(Algorithm, Statistics)>)>> {
    let mut summary = Vec::with_capacity(InputShape::ALL.len());
    for shape in InputShape::ALL {
        let series = results.shape(shape);
        let rows = Algorithm::ALL
            .iter()
            .map(|&algorithm| calculate_stats(series.series(algorithm)).map(|s| (algorithm, s)))
            .collect::<hybridsort::Result<Vec<_>>>()?;
        summary.push((shape, rows));
    }
    Ok(summary)
}

pub fn print_summary(
    summary: &[(InputShape, Vec<(Algorithm, Statistics)>)],
    threshold: usize,
    array_len: usize,
) {
    for (shape, rows) in summary {
        println!();
        println!(
            "Statistics for the {} (ms) - n={}, n0={}",
            shape,
            format_number(array_len),
            threshold
        );
        println!("┌────────────────┬────────────┬────────────┬────────────┬────────────┬────────────┐");
        println!("│   Algorithm    │    Mean    │    Min     │    Max     │    Mode    │  Std Dev   │");
        println!("├────────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤");
        for (algorithm, stats) in rows {
            println!(
                "│ {:<14} │ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
                algorithm.label(),
                stats.mean,
                stats.min,
                stats.max,
                stats.mode,
                stats.std_dev
            );
        }
        println!("└────────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘");
    }
}
