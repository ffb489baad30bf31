//! Result writing for neodb
//!
//! Serializes a stream of linked approaches:
//! - CSV: one flat row per approach, NEO fields inlined
//! - JSON: an array of objects with the NEO nested under `neo`
//!
//! Times are written as `YYYY-MM-DD HH:MM`.

mod csv_writer;
mod errors;
mod json_writer;
mod records;

pub use csv_writer::{write_csv, write_to_csv};
pub use errors::{WriteError, WriteResult};
pub use json_writer::{write_json, write_to_json};
pub use records::{ApproachRecord, FlatApproachRecord, NeoRecord, CSV_HEADER};

use std::path::Path;

use crate::database::LinkedApproach;
use crate::observability::{log_event_with_fields, Event};

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Chooses a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes results to `path` in the format its extension names.
pub fn write_results<'db>(
    results: impl IntoIterator<Item = LinkedApproach<'db>>,
    path: &Path,
) -> WriteResult<usize> {
    let format = OutputFormat::from_path(path)
        .ok_or_else(|| WriteError::UnsupportedFormat(path.display().to_string()))?;

    let written = match format {
        OutputFormat::Csv => write_to_csv(results, path)?,
        OutputFormat::Json => write_to_json(results, path)?,
    };

    log_event_with_fields(
        Event::ResultsWritten,
        &[
            ("format", format.as_str()),
            ("path", &path.display().to_string()),
            ("rows", &written.to_string()),
        ],
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_path(Path::new("OUT.JSON")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path(Path::new("out.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let err = write_results(std::iter::empty(), Path::new("results.xml")).unwrap_err();
        assert!(matches!(err, WriteError::UnsupportedFormat(_)));
    }
}
