//! Command-line argument definitions for the biotic processor
//!
//! The CLI surface is deliberately small: the extraction configuration
//! (filename pattern, target mission type, field schema) is fixed at build
//! time; the only runtime input is where to look for files, plus logging
//! controls.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the biotic XML extractor
///
/// Extracts catch-sample observations from IMR biotic v3 XML files in the
/// search directory and writes one `;`-delimited CSV file per input file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "biotic-processor",
    version,
    about = "Extract catch samples from biotic v3 XML survey files to delimited CSV",
    long_about = "Streams IMR biotic v3 XML files (however large) in a single constant-memory \
                  pass, keeps only the missions of the configured survey type, and flattens \
                  each catch sample to one row of a ;-delimited CSV file placed next to its \
                  input file."
)]
pub struct Args {
    /// Directory to search for input files
    ///
    /// Files matching the compiled-in pattern (biotic*.xml) directly inside
    /// this directory are processed in sorted filename order. Defaults to
    /// the current working directory.
    #[arg(value_name = "PATH", help = "Directory to search for biotic XML files")]
    pub search_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", help = "Suppress all non-error output")]
    pub quiet: bool,
}

impl Args {
    /// Effective search directory
    pub fn get_search_path(&self) -> PathBuf {
        self.search_path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Tracing level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether to render the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory() {
        let args = Args::parse_from(["biotic-processor"]);
        assert_eq!(args.get_search_path(), PathBuf::from("."));
        assert_eq!(args.get_log_level(), "info");
        assert!(args.show_progress());
    }

    #[test]
    fn positional_path_is_accepted() {
        let args = Args::parse_from(["biotic-processor", "/data/biotic"]);
        assert_eq!(args.get_search_path(), PathBuf::from("/data/biotic"));
    }

    #[test]
    fn verbosity_levels() {
        let args = Args::parse_from(["biotic-processor", "-vv"]);
        assert_eq!(args.get_log_level(), "trace");

        let args = Args::parse_from(["biotic-processor", "-v"]);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn quiet_overrides_verbose() {
        let args = Args::parse_from(["biotic-processor", "-v", "--quiet"]);
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
