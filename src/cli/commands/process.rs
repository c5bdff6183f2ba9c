//! Extraction workflow for the biotic processor CLI
//!
//! Orchestrates one run: configuration, input discovery, the per-file
//! extraction loop with progress reporting, and the final summary.

use super::shared::{create_progress_bar, setup_logging, ProcessingStats};
use crate::app::services::discovery::discover_input_files;
use crate::app::services::extractor::extract_file;
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Run a full extraction over the search directory.
///
/// Files are processed strictly one at a time in sorted filename order; the
/// output file for each input is closed before the next input is opened. A
/// malformed input aborts the run with the error surfaced; its partially
/// written output is left for the caller to deal with.
pub fn run_process(args: Args) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting biotic processor");
    debug!("Command line arguments: {:?}", args);

    match &args.search_path {
        Some(path) => info!("Search path set to: {}", path.display()),
        None => info!("No search path specified, assuming working directory."),
    }

    let config = Config::default().with_search_path(args.get_search_path());
    config.validate()?;

    let files = discover_input_files(&config.search_path, &config.name_pattern)?;
    if files.is_empty() {
        info!("No XML files found, please check search path.");
        if !args.quiet {
            println!("No XML files found, please check search path.");
        }
        return Ok(ProcessingStats::default());
    }

    info!(
        "Found {} data files, starting processing with lifesign={}.",
        files.len(),
        config.lifesign
    );

    let progress = create_progress_bar(files.len() as u64, args.show_progress());
    let mut stats = ProcessingStats::default();

    for file in &files {
        progress.set_message(
            file.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let summary = extract_file(&config, file)?;
        stats.files_processed += 1;
        stats.stations += summary.stations;
        stats.samples_accepted += summary.accepted;
        stats.samples_skipped += summary.skipped;

        if !args.quiet {
            progress.println(summary.report());
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    stats.processing_time = start_time.elapsed();

    report_final(&args, &stats);
    Ok(stats)
}

/// Print the run summary to stdout
fn report_final(args: &Args, stats: &ProcessingStats) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Finished!".green().bold());
    println!(
        "  {} files processed in {}",
        stats.files_processed.to_string().cyan(),
        HumanDuration(stats.processing_time)
    );
    println!(
        "  {} hauls, {} catch items saved, {} skipped due to missing data",
        stats.stations.to_string().cyan(),
        stats.samples_accepted.to_string().cyan(),
        stats.samples_skipped.to_string().yellow()
    );
}
