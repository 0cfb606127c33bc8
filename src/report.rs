//! Spreadsheet export of the raw per-round timings.
//!
//! The report is a CSV sheet with one section per input shape:
//!
//! ```text
//! Sorted Array
//! Execution,Insertion Sort,Merge Sort,Hybrid Sort
//! Exec 1,<ms>,<ms>,<ms>
//! ...
//! Reverse Array
//! Execution,Insertion Sort,Merge Sort,Hybrid Sort
//! ...
//! ```

use crate::error::Result;
use crate::experiment::{InputShape, ResultsBundle};
use crate::timer::Algorithm;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Where the benchmark binary writes its report, relative to the working directory.
pub const REPORT_PATH: &str = "resultados_experimento.csv";

pub fn render_csv(results: &ResultsBundle) -> String {
    let mut csv = String::new();
    let header = std::iter::once("Execution")
        .chain(Algorithm::ALL.iter().map(|a| a.label()))
        .collect::<Vec<_>>()
        .join(",");

    for shape in InputShape::ALL {
        let series = results.shape(shape);
        csv.push_str(shape.label());
        csv.push('\n');
        csv.push_str(&header);
        csv.push('\n');

        for round in 0..series.rounds() {
            // Writing to a String never fails
            let _ = write!(csv, "Exec {}", round + 1);
            for algorithm in Algorithm::ALL {
                let _ = write!(csv, ",{}", series.series(algorithm)[round]);
            }
            csv.push('\n');
        }
    }

    csv
}

pub fn export_csv(results: &ResultsBundle, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_csv(results))?;
    info!(path = %path.display(), "exported report");
    Ok(())
}
