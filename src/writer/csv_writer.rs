//! Flattened CSV output

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::database::LinkedApproach;

use super::errors::WriteResult;
use super::records::{FlatApproachRecord, CSV_HEADER};

/// Writes results to a CSV file, header first. Returns the row count.
pub fn write_to_csv<'db>(
    results: impl IntoIterator<Item = LinkedApproach<'db>>,
    path: impl AsRef<Path>,
) -> WriteResult<usize> {
    let file = File::create(path.as_ref())?;
    write_csv(results, file)
}

/// Writes results as CSV to any sink. Returns the row count.
///
/// The header is written even when there are no results.
pub fn write_csv<'db, W: Write>(
    results: impl IntoIterator<Item = LinkedApproach<'db>>,
    sink: W,
) -> WriteResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for linked in results {
        writer.serialize(FlatApproachRecord::from(linked))?;
        rows += 1;
    }
    writer.flush()?;

    Ok(rows)
}
