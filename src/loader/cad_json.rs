//! Close-approach records from JSON
//!
//! Expects the tabular layout `{"fields": [...], "data": [[...], ...]}`.
//! Columns are located by name: `des`, `cd`, `dist`, `v_rel`. A missing
//! `des` leaves the designation empty, so the approach stays orphaned.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{parse_approach_time, CloseApproach};

use super::errors::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

struct Columns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl Columns {
    fn locate(fields: &[String], origin: &str) -> LoadResult<Self> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    origin: origin.to_string(),
                    column: name.to_string(),
                })
        };
        Ok(Self {
            designation: find("des")?,
            time: find("cd")?,
            distance: find("dist")?,
            velocity: find("v_rel")?,
        })
    }
}

/// Loads close approaches from a JSON file.
pub fn load_approaches(path: impl AsRef<Path>) -> LoadResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    approaches_from_reader(BufReader::new(file), &origin)
}

/// Reads close approaches from any JSON source. `origin` names the source
/// in errors.
pub fn approaches_from_reader<R: Read>(
    reader: R,
    origin: &str,
) -> LoadResult<Vec<CloseApproach>> {
    let document: CadDocument =
        serde_json::from_reader(reader).map_err(|source| LoadError::Json {
            origin: origin.to_string(),
            source,
        })?;

    let columns = Columns::locate(&document.fields, origin)?;

    document
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| approach_from_row(row, &columns, origin, i + 1))
        .collect()
}

/// Cell as text; null, missing and empty cells are absent
fn cell(row: &[Value], index: usize) -> Option<String> {
    match row.get(index)? {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn approach_from_row(
    row: &[Value],
    columns: &Columns,
    origin: &str,
    row_number: usize,
) -> LoadResult<CloseApproach> {
    let required = |index: usize, field: &'static str| {
        cell(row, index).ok_or_else(|| LoadError::MissingValue {
            origin: origin.to_string(),
            row: row_number,
            field,
        })
    };
    let number = |index: usize, field: &'static str| -> LoadResult<Option<f64>> {
        match cell(row, index) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|_| LoadError::InvalidValue {
                    origin: origin.to_string(),
                    row: row_number,
                    field,
                    value: raw,
                }),
        }
    };

    let designation = cell(row, columns.designation).unwrap_or_default();
    let time = parse_approach_time(&required(columns.time, "cd")?).map_err(|source| {
        LoadError::InvalidTime {
            origin: origin.to_string(),
            row: row_number,
            source,
        }
    })?;

    let mut approach = CloseApproach::new(designation, time);
    if let Some(distance) = number(columns.distance, "dist")? {
        approach = approach.with_distance(distance);
    }
    if let Some(velocity) = number(columns.velocity, "v_rel")? {
        approach = approach.with_velocity(velocity);
    }

    Ok(approach)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &str = r#"["des","orbit_id","jd","cd","dist","dist_min","dist_max","v_rel","v_inf","t_sigma_f","h"]"#;

    fn read(data: &str) -> LoadResult<Vec<CloseApproach>> {
        let doc = format!(r#"{{"signature":{{}},"count":"1","fields":{},"data":{}}}"#, FIELDS, data);
        approaches_from_reader(doc.as_bytes(), "cad.json")
    }

    #[test]
    fn test_row() {
        let approaches = read(
            r#"[["170903","105","2415020.507","1900-Jan-01 00:11","0.0921795123","0.09","0.09","16.75","16.7","< 00:01","18.1"]]"#,
        )
        .unwrap();
        assert_eq!(approaches.len(), 1);
        let ca = &approaches[0];
        assert_eq!(ca.designation(), "170903");
        assert_eq!(ca.time_str(), "1900-01-01 00:11");
        assert_eq!(ca.distance(), 0.0921795123);
        assert_eq!(ca.velocity(), 16.75);
        assert!(!ca.is_linked());
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let approaches =
            read(r#"[["X","1","0","2000-Feb-29 12:30",null,"","","","","",""]]"#).unwrap();
        assert_eq!(approaches[0].distance(), 0.0);
        assert_eq!(approaches[0].velocity(), 0.0);
    }

    #[test]
    fn test_missing_designation_loads_empty() {
        let approaches =
            read(r#"[[null,"1","0","2000-Feb-29 12:30","0.1","","","1","","",""]]"#).unwrap();
        assert_eq!(approaches[0].designation(), "");
    }

    #[test]
    fn test_bad_time_fails() {
        let err = read(r#"[["X","1","0","2000-02-29","0.1","","","1","","",""]]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn test_bad_number_fails() {
        let err =
            read(r#"[["X","1","0","2000-Feb-29 12:30","far","","","1","","",""]]"#).unwrap_err();
        assert!(err.to_string().contains("invalid dist 'far'"));
    }

    #[test]
    fn test_missing_column_fails() {
        let doc = r#"{"fields":["des","cd"],"data":[]}"#;
        let err = approaches_from_reader(doc.as_bytes(), "cad.json").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "dist"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = approaches_from_reader("{".as_bytes(), "cad.json").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }
}
