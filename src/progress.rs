//! Round-by-round progress reporting for the experiment runner.
//!
//! Reporting is observational: the runner only calls into a [`Progress`] between
//! timed regions, never inside one.

use indicatif::{ProgressBar, ProgressStyle};

pub trait Progress {
    fn start(&mut self, _total: usize) {}

    /// Called once after each completed round (1-based).
    fn advance(&mut self, round: usize, total: usize, eta_secs: f64);

    fn finish(&mut self) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn advance(&mut self, _round: usize, _total: usize, _eta_secs: f64) {}
}

/// Terminal progress bar showing rounds done and estimated seconds remaining.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(prefix: impl Into<String>) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{prefix} [{bar:40}] {percent}% | {pos}/{len} Rounds | Remaining: {msg}s",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("\u{2588}\u{2588}\u{2591}"),
        );
        bar.set_prefix(prefix.into());
        BarProgress { bar }
    }
}

impl Progress for BarProgress {
    fn start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    }

    fn advance(&mut self, round: usize, _total: usize, eta_secs: f64) {
        self.bar.set_message(format!("{:.2}", eta_secs));
        self.bar.set_position(round as u64);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}
