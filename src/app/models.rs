//! Core data models for biotic extraction
//!
//! This module defines the mutable record accumulator used by the streaming
//! extractor and the per-file processing summary reported to the user.

use crate::app::services::schema::SAMPLE_SCOPED_FIELDS;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mutable accumulator for one mission-qualifying station/catch-sample
/// combination.
///
/// One logical mapping holds two scopes: station-scoped fields persist
/// across sibling catch samples within the same station, while sample-scoped
/// fields are cleared after every catchsample close. At most one record is
/// live at a time; it exists only while inside a qualifying mission.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, overwriting any prior value
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Get a field value if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Whether a field has a recorded value
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Remove a single field, marking it absent
    pub fn remove(&mut self, field: &str) {
        self.fields.remove(field);
    }

    /// Clear the sample-scoped fields, keeping station-scoped fields for the
    /// next sibling catch sample
    pub fn clear_sample_fields(&mut self) {
        for field in SAMPLE_SCOPED_FIELDS {
            self.fields.remove(*field);
        }
    }

    /// Number of recorded fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are recorded
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Summary of one processed input file
#[derive(Debug, Clone)]
pub struct FileSummary {
    /// Input file path
    pub input_path: PathBuf,
    /// Derived output file path
    pub output_path: PathBuf,
    /// Stations (hauls) encountered inside qualifying missions
    pub stations: usize,
    /// Catch samples accepted and written
    pub accepted: usize,
    /// Catch samples skipped due to missing data
    pub skipped: usize,
}

impl FileSummary {
    /// One-line report in the style of the console summary
    pub fn report(&self) -> String {
        format!(
            "Saved {} hauls with {} catch items ({} skipped due to missing data) in {}",
            self.stations,
            self.accepted,
            self.skipped,
            self.output_path.display()
        )
    }
}
