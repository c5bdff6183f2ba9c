//! Application constants for the biotic processor
//!
//! This module contains the compiled-in defaults and the biotic v3 element
//! names used throughout the extraction pipeline.

// =============================================================================
// Input Discovery
// =============================================================================

/// Default filename pattern matched against files in the search directory
pub const DEFAULT_NAME_PATTERN: &str = "biotic*.xml";

/// Output file extension substituted for a trailing `.xml`
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// Mission Filtering
// =============================================================================

/// Biotic year files can contain many different mission types. Only data
/// from missions of this type is extracted by default.
pub const DEFAULT_MISSION_TYPE_NAME: &str = "Referanseflåten-Kyst";

/// Liveness reporting interval in stations; 0 disables liveness messages
pub const DEFAULT_LIFESIGN: usize = 0;

// =============================================================================
// Biotic v3 Element Names
// =============================================================================

/// Top-level grouping element for one survey/cruise
pub const MISSION_ELEMENT: &str = "mission";

/// Leaf element whose text names the mission type; opens the extraction gate
pub const MISSION_TYPE_ELEMENT: &str = "missiontypename";

/// One fishing/sampling event within a mission
pub const STATION_ELEMENT: &str = "fishstation";

/// Attribute on the station element holding the station serial number
pub const STATION_SERIAL_ATTRIBUTE: &str = "serialnumber";

/// One species-level observation within a station
pub const CATCH_SAMPLE_ELEMENT: &str = "catchsample";

// =============================================================================
// Output Format
// =============================================================================

/// Column delimiter in the output CSV
pub const OUTPUT_DELIMITER: char = ';';

/// Placeholder written for schema fields absent from a record
pub const MISSING_VALUE: &str = "NA";
