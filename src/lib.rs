//! Biotic Processor Library
//!
//! A Rust library for extracting catch-sample observations from IMR biotic
//! v3 XML exchange files and flattening them to `;`-delimited CSV.
//!
//! This library provides tools for:
//! - Streaming single-pass parsing of multi-gigabyte biotic XML files
//! - Filtering observations to a single configured mission type
//! - Accumulating station and catch-sample fields into flat records
//! - Writing one CSV row per accepted catch sample, row at a time
//! - Per-file summary statistics and error reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_writer;
        pub mod discovery;
        pub mod extractor;
        pub mod schema;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileSummary, Record};
pub use app::services::schema::FieldSchema;
pub use config::Config;

/// Result type alias for the biotic processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for biotic processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML in an input file; fatal for that file
    #[error("XML parse error in file '{file}': {source}")]
    XmlParse {
        file: String,
        #[source]
        source: quick_xml::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input discovery error (bad pattern or unreadable directory)
    #[error("Discovery error: {message}")]
    Discovery { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an XML parse error naming the offending file
    pub fn xml_parse(file: impl Into<String>, source: quick_xml::Error) -> Self {
        Self::XmlParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Discovery {
            message: format!("Invalid file pattern: {}", error),
        }
    }
}
