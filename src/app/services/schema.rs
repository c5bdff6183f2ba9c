//! Field schema for the biotic v3 extraction
//!
//! A fixed, ordered table of the extracted fields. Each identifier is the
//! exact lowercase XML leaf element name it is sourced from, except `serial`,
//! which is read from the `serialnumber` attribute of the station element.
//! Table order determines CSV column order.

/// Field sourced from the station serial number attribute
pub const SERIAL_FIELD: &str = "serial";

/// Species name field, required for a row to be accepted
pub const COMMON_NAME_FIELD: &str = "commonname";

/// Station comment field, sanitized at emission time
pub const STATION_COMMENT_FIELD: &str = "stationcomment";

/// Extracted fields in CSV column order
pub const FIELDS: &[&str] = &[
    "platformname",
    "callsignal",
    "serial",
    "stationstartdate",
    "stationstopdate",
    "latitudestart",
    "longitudestart",
    "area",
    "location",
    "fishingdepthmax",
    "fishingdepthmin",
    "gear",
    "gearcount",
    "soaktime",
    "stationcomment",
    "commonname",
    "catchweight",
    "catchcount",
    "lengthsampleweight",
    "lengthsamplecount",
    "specimensamplecount",
];

/// Fields scoped to one catch sample, cleared after every catchsample close.
/// All other schema fields are station-scoped and persist across sibling
/// catch samples within the same station.
pub const SAMPLE_SCOPED_FIELDS: &[&str] = &[
    "commonname",
    "catchweight",
    "catchcount",
    "lengthsampleweight",
    "lengthsamplecount",
    "specimensamplecount",
];

/// Quantity fields; at least one must be present for a row to be accepted
pub const QUANTITY_FIELDS: &[&str] = &[
    "catchweight",
    "catchcount",
    "lengthsampleweight",
    "lengthsamplecount",
    "specimensamplecount",
];

/// Ordered, immutable field schema consumed by the extractor (which leaf
/// text to capture) and the CSV writer (column order).
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldSchema;

impl FieldSchema {
    /// Fields in output column order
    pub fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    /// Number of output columns
    pub fn len(&self) -> usize {
        FIELDS.len()
    }

    /// The schema is never empty
    pub fn is_empty(&self) -> bool {
        FIELDS.is_empty()
    }

    /// Whether an element name is a schema field
    pub fn contains(&self, name: &str) -> bool {
        FIELDS.contains(&name)
    }

    /// Whether a field is cleared at each catchsample boundary
    pub fn is_sample_scoped(&self, name: &str) -> bool {
        SAMPLE_SCOPED_FIELDS.contains(&name)
    }

    /// Whether a field counts toward the quantity requirement
    pub fn is_quantity(&self, name: &str) -> bool {
        QUANTITY_FIELDS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_expected_shape() {
        let schema = FieldSchema;
        assert_eq!(schema.len(), 21);
        assert!(!schema.is_empty());
        assert_eq!(schema.fields()[0], "platformname");
        assert_eq!(schema.fields()[2], SERIAL_FIELD);
        assert_eq!(schema.fields()[20], "specimensamplecount");
    }

    #[test]
    fn scope_classification() {
        let schema = FieldSchema;
        assert!(schema.is_sample_scoped(COMMON_NAME_FIELD));
        assert!(schema.is_sample_scoped("catchweight"));
        assert!(!schema.is_sample_scoped(SERIAL_FIELD));
        assert!(!schema.is_sample_scoped("platformname"));
        assert!(!schema.is_sample_scoped(STATION_COMMENT_FIELD));
    }

    #[test]
    fn quantity_fields_exclude_commonname() {
        let schema = FieldSchema;
        assert!(schema.is_quantity("catchcount"));
        assert!(schema.is_quantity("specimensamplecount"));
        assert!(!schema.is_quantity(COMMON_NAME_FIELD));
        assert!(!schema.is_quantity(SERIAL_FIELD));
    }

    #[test]
    fn every_scoped_field_is_a_schema_field() {
        let schema = FieldSchema;
        for field in SAMPLE_SCOPED_FIELDS {
            assert!(schema.contains(field), "unknown field {field}");
        }
        for field in QUANTITY_FIELDS {
            assert!(schema.is_sample_scoped(field), "{field} must be sample scoped");
        }
    }
}
