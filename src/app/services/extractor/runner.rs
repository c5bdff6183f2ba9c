//! Per-file extraction driver
//!
//! Drives quick-xml events from a buffered reader through the extraction
//! state machine, writing accepted rows to the paired output as they
//! complete. One reused event buffer keeps allocation constant regardless of
//! document size.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

use super::machine::ExtractorMachine;
use super::stats::ExtractStats;
use crate::app::models::FileSummary;
use crate::app::services::csv_writer::{derive_output_path, RowWriter};
use crate::constants::{STATION_ELEMENT, STATION_SERIAL_ATTRIBUTE};
use crate::config::Config;
use crate::{Error, Result};

/// Extract one input file to its derived `.csv` output.
///
/// The output file is created (header line included) before parsing starts
/// and is flushed and closed before this function returns. A malformed
/// document aborts with an error naming the file; any partially written
/// output is left in place for the caller to deal with.
pub fn extract_file(config: &Config, input: &Path) -> Result<FileSummary> {
    info!("Extracting {}", input.display());

    let output_path = derive_output_path(input);
    let file = File::open(input)
        .map_err(|e| Error::io(format!("Failed to open input file {}", input.display()), e))?;
    let reader = BufReader::new(file);
    let mut writer = RowWriter::create(&output_path)?;

    let stats = extract_stream(config, reader, &mut writer, &input.display().to_string())?;
    writer.finish()?;

    let summary = FileSummary {
        input_path: input.to_path_buf(),
        output_path,
        stations: stats.stations,
        accepted: stats.accepted,
        skipped: stats.skipped,
    };
    debug!("{}", summary.report());
    Ok(summary)
}

/// Run the extraction state machine over an XML byte stream, emitting rows
/// to `writer`. `source_name` identifies the stream in parse errors.
pub fn extract_stream<R: BufRead, W: Write>(
    config: &Config,
    source: R,
    writer: &mut RowWriter<W>,
    source_name: &str,
) -> Result<ExtractStats> {
    let mut reader = Reader::from_reader(source);
    let mut machine = ExtractorMachine::new(&config.mission_type_name, config.lifesign);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let serial = station_serial(e, &tag, source_name)?;
                machine.open_element(&tag, serial.as_deref());
            }
            Ok(Event::Empty(ref e)) => {
                // A self-closing element behaves as open immediately
                // followed by close.
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let serial = station_serial(e, &tag, source_name)?;
                machine.open_element(&tag, serial.as_deref());
                machine.close_element(&tag, writer)?;
            }
            Ok(Event::Text(ref t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::xml_parse(source_name, e))?;
                machine.text(&text);
            }
            Ok(Event::CData(ref t)) => {
                // CDATA content is literal; no entity unescaping applies.
                let text = String::from_utf8_lossy(t.as_ref());
                machine.text(&text);
            }
            Ok(Event::End(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                machine.close_element(&tag, writer)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::xml_parse(source_name, e)),
        }
        buf.clear();
    }

    Ok(machine.into_stats())
}

/// Extract the station serial number attribute when `tag` is the station
/// element. A missing attribute yields `None`; the machine records the
/// serial as absent.
fn station_serial(e: &BytesStart, tag: &str, source_name: &str) -> Result<Option<String>> {
    if tag != STATION_ELEMENT {
        return Ok(None);
    }
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::xml_parse(source_name, quick_xml::Error::from(e)))?;
        if attr.key.as_ref() == STATION_SERIAL_ATTRIBUTE.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::xml_parse(source_name, e))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
