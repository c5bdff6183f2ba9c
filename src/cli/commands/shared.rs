//! Shared components for CLI commands
//!
//! Logging setup, progress bar construction, and the run-level statistics
//! reported when processing finishes.

use crate::cli::args::Args;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Run-level statistics aggregated across all processed files
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of input files processed
    pub files_processed: usize,
    /// Stations encountered inside qualifying missions
    pub stations: usize,
    /// Catch samples accepted and written
    pub samples_accepted: usize,
    /// Catch samples skipped due to missing data
    pub samples_skipped: usize,
    /// Total processing time
    pub processing_time: Duration,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("biotic_processor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar over the input file list
pub fn create_progress_bar(total_files: u64, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total_files);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_default_to_zero() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.stations, 0);
        assert_eq!(stats.samples_accepted, 0);
        assert_eq!(stats.samples_skipped, 0);
    }

    #[test]
    fn hidden_progress_bar_when_disabled() {
        let bar = create_progress_bar(10, false);
        assert!(bar.is_hidden());
    }
}
