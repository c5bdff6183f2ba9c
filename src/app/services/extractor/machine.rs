//! Streaming extraction state machine
//!
//! The machine consumes the three primitives a streaming XML reader
//! provides (element open, text content, element close) and produces zero or
//! more emitted rows. It keeps only the current tag, the immediate parent
//! tag, a mission-type gate, and the one in-progress record, so memory stays
//! constant in file size.

use super::stats::ExtractStats;
use crate::app::models::Record;
use crate::app::services::csv_writer::RowWriter;
use crate::app::services::schema::{FieldSchema, COMMON_NAME_FIELD, QUANTITY_FIELDS, SERIAL_FIELD};
use crate::constants::{
    CATCH_SAMPLE_ELEMENT, MISSION_ELEMENT, MISSION_TYPE_ELEMENT, STATION_ELEMENT,
};
use crate::Result;
use std::io::Write;
use tracing::{debug, info};

/// State machine for one input file.
///
/// The gate opens the instant a `missiontypename` leaf's text equals the
/// configured target mission type and closes when the enclosing `mission`
/// element does; rows are emitted only while the gate is open.
#[derive(Debug)]
pub struct ExtractorMachine<'a> {
    mission_type_name: &'a str,
    lifesign: usize,
    schema: FieldSchema,
    gate: bool,
    record: Option<Record>,
    current_tag: String,
    parent_tag: String,
    stats: ExtractStats,
}

impl<'a> ExtractorMachine<'a> {
    /// Create a machine targeting one mission type
    pub fn new(mission_type_name: &'a str, lifesign: usize) -> Self {
        Self {
            mission_type_name,
            lifesign,
            schema: FieldSchema,
            gate: false,
            record: None,
            current_tag: String::new(),
            parent_tag: String::new(),
            stats: ExtractStats::new(),
        }
    }

    /// Whether extraction is currently active
    pub fn gate(&self) -> bool {
        self.gate
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &ExtractStats {
        &self.stats
    }

    /// Immediate parent of the current element.
    ///
    /// Single-level tracking only: the parent is set on open and never
    /// restored on close. Nothing in the schema needs deeper ancestry.
    pub fn parent_tag(&self) -> &str {
        &self.parent_tag
    }

    /// Element-open transition.
    ///
    /// `serial` is the value of the station serial number attribute, already
    /// extracted by the caller when `tag` is the station element. An absent
    /// attribute records the serial as absent rather than failing; the
    /// station's catch samples are then rejected downstream for lack of a
    /// serial.
    pub fn open_element(&mut self, tag: &str, serial: Option<&str>) {
        self.parent_tag = std::mem::take(&mut self.current_tag);
        self.current_tag = tag.to_string();

        if self.gate && tag == STATION_ELEMENT {
            if let Some(record) = self.record.as_mut() {
                match serial {
                    Some(value) => record.set(SERIAL_FIELD, value),
                    None => record.remove(SERIAL_FIELD),
                }
            }
            self.stats.stations += 1;
            if self.lifesign > 0 && self.stats.stations % self.lifesign == 0 {
                info!(
                    "processed {} hauls with {} catch items",
                    self.stats.stations, self.stats.accepted
                );
            }
        }
    }

    /// Text-content transition.
    ///
    /// Text is normalized by removing newline characters and trimming
    /// surrounding whitespace. Repeated text chunks under one tag overwrite,
    /// so the last chunk wins. The mission-type check runs on every text
    /// event regardless of gate state; it is the sole mechanism that opens
    /// the gate.
    pub fn text(&mut self, raw: &str) {
        let content = normalize_text(raw);

        if self.gate {
            if let Some(record) = self.record.as_mut() {
                if self.schema.contains(&self.current_tag) {
                    record.set(&self.current_tag, content.as_str());
                }
            }
        }

        if self.current_tag == MISSION_TYPE_ELEMENT && content == self.mission_type_name {
            debug!("mission type matched: {}", self.mission_type_name);
            self.gate = true;
            self.record = Some(Record::new());
        }
    }

    /// Element-close transition.
    ///
    /// Acts only while the gate is open. A catchsample close validates and
    /// emits the record, then clears the sample-scoped fields; a mission
    /// close discards the record and closes the gate, terminating the
    /// qualifying region.
    pub fn close_element<W: Write>(&mut self, tag: &str, writer: &mut RowWriter<W>) -> Result<()> {
        if !self.gate {
            return Ok(());
        }

        if tag == CATCH_SAMPLE_ELEMENT {
            if let Some(record) = self.record.as_mut() {
                if is_complete(record) {
                    writer.write_row(record)?;
                    self.stats.accepted += 1;
                } else {
                    self.stats.skipped += 1;
                }
                record.clear_sample_fields();
            }
        }

        if tag == MISSION_ELEMENT {
            self.record = None;
            self.gate = false;
        }

        self.current_tag.clear();
        Ok(())
    }

    /// Consume the machine, returning its counters
    pub fn into_stats(self) -> ExtractStats {
        self.stats
    }
}

/// Strip newline characters, then leading and trailing whitespace
pub fn normalize_text(raw: &str) -> String {
    raw.replace('\n', "").trim().to_string()
}

/// Minimal-completeness rule: a serial, a species name, and at least one
/// quantity field.
fn is_complete(record: &Record) -> bool {
    record.contains(SERIAL_FIELD)
        && record.contains(COMMON_NAME_FIELD)
        && QUANTITY_FIELDS.iter().any(|field| record.contains(field))
}
