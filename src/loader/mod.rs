//! Record loading for neodb
//!
//! Reads the two source collections, unlinked:
//! - NEOs from a CSV file with a header row
//! - Close approaches from a tabular JSON document
//!
//! Missing optional values are omitted so entity defaults apply. Malformed
//! records fail the whole load; the database never sees partial input.

mod cad_json;
mod errors;
mod neo_csv;

pub use cad_json::{approaches_from_reader, load_approaches};
pub use errors::{LoadError, LoadResult};
pub use neo_csv::{load_neos, neos_from_reader};
