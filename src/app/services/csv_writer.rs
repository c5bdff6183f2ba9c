//! Streaming CSV row writer
//!
//! Writes one header line plus one `;`-delimited row per accepted catch
//! sample, row at a time, so memory stays bounded regardless of how many
//! rows a file produces. The output file for one input is exclusively owned
//! by that input's extraction run.

use crate::app::models::Record;
use crate::app::services::schema::{FieldSchema, STATION_COMMENT_FIELD};
use crate::constants::{MISSING_VALUE, OUTPUT_DELIMITER, OUTPUT_EXTENSION};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Derive the output path from an input path: a trailing `.xml` extension is
/// replaced with `.csv`; if there is no such extension, `.csv` is appended.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    if let Some(stem) = name.strip_suffix(".xml") {
        PathBuf::from(format!("{}.{}", stem, OUTPUT_EXTENSION))
    } else {
        PathBuf::from(format!("{}.{}", name, OUTPUT_EXTENSION))
    }
}

/// Row-at-a-time writer for the delimited output of one input file
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    writer: W,
    schema: FieldSchema,
}

impl RowWriter<BufWriter<File>> {
    /// Create the output file and write the header line
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create output file {}", path.display()), e))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> RowWriter<W> {
    /// Wrap a destination stream and write the header line
    pub fn new(mut writer: W) -> Result<Self> {
        let schema = FieldSchema;
        let header = schema.fields().join(&OUTPUT_DELIMITER.to_string());
        writeln!(writer, "{}", header)?;
        Ok(Self { writer, schema })
    }

    /// Write one row in schema column order.
    ///
    /// Absent fields render as the literal `NA` placeholder. Semicolons in
    /// the station comment are replaced with colons, since the semicolon is
    /// the column delimiter. The record itself is not modified.
    pub fn write_row(&mut self, record: &Record) -> Result<()> {
        let delimiter = OUTPUT_DELIMITER.to_string();
        let row = self
            .schema
            .fields()
            .iter()
            .map(|field| match record.get(field) {
                Some(value) if *field == STATION_COMMENT_FIELD => {
                    value.replace(OUTPUT_DELIMITER, ":")
                }
                Some(value) => value.to_string(),
                None => MISSING_VALUE.to_string(),
            })
            .collect::<Vec<_>>()
            .join(&delimiter);
        writeln!(self.writer, "{}", row)?;
        Ok(())
    }

    /// Flush the destination stream at end of file
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the destination stream
    pub fn into_inner(self) -> W {
        self.writer
    }
}
