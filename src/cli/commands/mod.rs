//! Command implementations for the biotic processor CLI
//!
//! The processor has a single workflow: discover matching XML files and
//! extract them one at a time. Shared helpers (logging, progress, run
//! statistics) live in their own module.

pub mod process;
pub mod shared;

pub use shared::ProcessingStats;

use crate::cli::args::Args;
use crate::Result;

/// Main command runner for the biotic processor
pub fn run(args: Args) -> Result<ProcessingStats> {
    process::run_process(args)
}
