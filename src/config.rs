//! Configuration management and validation.
//!
//! Provides the immutable run configuration for the extraction pipeline:
//! search path, filename pattern, target mission type, and liveness
//! reporting interval. Constructed once at startup and passed by reference
//! into the extractor; there is no process-wide mutable configuration.

use crate::constants::{DEFAULT_LIFESIGN, DEFAULT_MISSION_TYPE_NAME, DEFAULT_NAME_PATTERN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for a biotic extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory searched for input files
    pub search_path: PathBuf,

    /// Glob pattern matched against filenames in the search directory
    pub name_pattern: String,

    /// Only missions whose type name equals this string are extracted
    pub mission_type_name: String,

    /// Print a liveness message every this many stations (0 = disabled)
    pub lifesign: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_path: PathBuf::from("."),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            mission_type_name: DEFAULT_MISSION_TYPE_NAME.to_string(),
            lifesign: DEFAULT_LIFESIGN,
        }
    }
}

impl Config {
    /// Create configuration with a custom search path
    pub fn with_search_path(mut self, search_path: impl Into<PathBuf>) -> Self {
        self.search_path = search_path.into();
        self
    }

    /// Create configuration with a custom filename pattern
    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = pattern.into();
        self
    }

    /// Create configuration with a custom target mission type name
    pub fn with_mission_type_name(mut self, mission_type_name: impl Into<String>) -> Self {
        self.mission_type_name = mission_type_name.into();
        self
    }

    /// Create configuration with a custom liveness interval
    pub fn with_lifesign(mut self, lifesign: usize) -> Self {
        self.lifesign = lifesign;
        self
    }

    /// Validate the configuration before processing starts
    pub fn validate(&self) -> Result<()> {
        if self.name_pattern.trim().is_empty() {
            return Err(Error::configuration("filename pattern must not be empty"));
        }
        if self.mission_type_name.is_empty() {
            return Err(Error::configuration(
                "target mission type name must not be empty",
            ));
        }
        Ok(())
    }
}
