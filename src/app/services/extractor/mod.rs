//! Streaming catch-sample extractor using quick-xml
//!
//! Single-pass, constant-memory extraction of catch-sample observations from
//! biotic v3 XML files. The state machine in [`machine`] implements the
//! element-open/text/element-close transitions; [`runner`] feeds it quick-xml
//! events and owns the per-file lifecycle.

pub use machine::ExtractorMachine;
pub use runner::{extract_file, extract_stream};
pub use stats::ExtractStats;

mod machine;
mod runner;
mod stats;

#[cfg(test)]
mod tests;
