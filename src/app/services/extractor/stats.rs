//! Extraction statistics for biotic file processing
//!
//! Counters are diagnostic only; they drive the per-file summary and the
//! liveness messages but carry no extraction semantics.

/// Per-file extraction counters
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ExtractStats {
    /// Stations (hauls) encountered inside qualifying missions
    pub stations: usize,

    /// Catch samples accepted and written as rows
    pub accepted: usize,

    /// Catch samples skipped due to missing required data
    pub skipped: usize,
}

impl ExtractStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total catch samples seen at validation
    pub fn total_samples(&self) -> usize {
        self.accepted + self.skipped
    }

    /// Fraction of samples accepted, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_samples() == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.total_samples() as f64) * 100.0
        }
    }
}
