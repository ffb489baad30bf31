//! Nested JSON output
//!
//! Writes a single JSON array, one element per result, without collecting
//! the result stream first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::database::LinkedApproach;

use super::errors::WriteResult;
use super::records::ApproachRecord;

/// Writes results to a JSON file. Returns the element count.
pub fn write_to_json<'db>(
    results: impl IntoIterator<Item = LinkedApproach<'db>>,
    path: impl AsRef<Path>,
) -> WriteResult<usize> {
    let file = File::create(path.as_ref())?;
    write_json(results, BufWriter::new(file))
}

/// Writes results as a JSON array to any sink. Returns the element count.
pub fn write_json<'db, W: Write>(
    results: impl IntoIterator<Item = LinkedApproach<'db>>,
    mut sink: W,
) -> WriteResult<usize> {
    sink.write_all(b"[")?;

    let mut count = 0;
    for linked in results {
        let separator: &[u8] = if count == 0 { b"\n  " } else { b",\n  " };
        sink.write_all(separator)?;
        serde_json::to_writer(&mut sink, &ApproachRecord::from(linked))?;
        count += 1;
    }

    let closing: &[u8] = if count == 0 { b"]\n" } else { b"\n]\n" };
    sink.write_all(closing)?;
    sink.flush()?;

    Ok(count)
}
