//! NEO records from CSV
//!
//! Columns are matched by header name: `pdes`, `name`, `diameter`, `pha`.
//! Other columns are ignored. Empty cells fall back to entity defaults, so
//! a row without `pdes` loads with an empty designation and never links.
//! `pha` is hazardous only when it is exactly `Y`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::NearEarthObject;

use super::errors::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    diameter: Option<String>,
    #[serde(default)]
    pha: Option<String>,
}

/// Loads NEOs from a CSV file.
pub fn load_neos(path: impl AsRef<Path>) -> LoadResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    neos_from_reader(file, &origin)
}

/// Reads NEOs from any CSV source. `origin` names the source in errors.
pub fn neos_from_reader<R: Read>(reader: R, origin: &str) -> LoadResult<Vec<NearEarthObject>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut neos = Vec::new();
    for (i, row) in reader.deserialize::<NeoRow>().enumerate() {
        let row_number = i + 1;
        let row = row.map_err(|source| LoadError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        neos.push(neo_from_row(row, origin, row_number)?);
    }

    Ok(neos)
}

fn neo_from_row(row: NeoRow, origin: &str, row_number: usize) -> LoadResult<NearEarthObject> {
    let designation = row.pdes.unwrap_or_default();

    let mut neo = NearEarthObject::new(designation).with_name(row.name);

    if let Some(raw) = row.diameter {
        let diameter = raw.parse::<f64>().map_err(|_| LoadError::InvalidValue {
            origin: origin.to_string(),
            row: row_number,
            field: "diameter",
            value: raw.clone(),
        })?;
        neo = neo.with_diameter(diameter);
    }

    if row.pha.as_deref() == Some("Y") {
        neo = neo.with_hazardous(true);
    }

    Ok(neo)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,spkid,full_name,pdes,name,prefix,neo,pha,diameter\n";

    fn read(body: &str) -> LoadResult<Vec<NearEarthObject>> {
        neos_from_reader(format!("{}{}", HEADER, body).as_bytes(), "test.csv")
    }

    #[test]
    fn test_full_row() {
        let neos = read("a0000433,2000433,433 Eros,433,Eros,,Y,N,16.84\n").unwrap();
        assert_eq!(neos.len(), 1);
        assert_eq!(neos[0].designation(), "433");
        assert_eq!(neos[0].name(), Some("Eros"));
        assert_eq!(neos[0].diameter(), 16.84);
        assert!(!neos[0].is_hazardous());
    }

    #[test]
    fn test_empty_cells_use_defaults() {
        let neos = read("bK20A00B,3000001,2020 AB,2020 AB,,,Y,Y,\n").unwrap();
        assert_eq!(neos[0].name(), None);
        assert!(neos[0].diameter().is_nan());
        assert!(neos[0].is_hazardous());
    }

    #[test]
    fn test_bad_diameter_fails() {
        let err = read("x,1,x,X,,,Y,N,wide\n").unwrap_err();
        assert_eq!(err.row(), Some(1));
        assert!(err.to_string().contains("diameter"));
    }

    #[test]
    fn test_only_y_is_hazardous() {
        let neos = read("x,1,x,X,,,Y,maybe,\ny,2,y,Y,,,Y,y,\nz,3,z,Z,,,Y,Y,\n").unwrap();
        let flags: Vec<_> = neos.iter().map(|n| n.is_hazardous()).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_missing_designation_loads_empty() {
        let neos = read("a,1,433 Eros,433,Eros,,Y,N,16.84\nb,2,nameless,,,,Y,N,\n").unwrap();
        assert_eq!(neos.len(), 2);
        assert_eq!(neos[1].designation(), "");
        assert_eq!(neos[1].name(), None);
    }
}
