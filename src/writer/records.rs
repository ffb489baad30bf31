//! Serializable result records
//!
//! JSON nests the NEO under `neo`; CSV flattens it into the row. Orphaned
//! approaches keep their own designation and leave every other NEO field
//! unknown (`null` / empty cell). Unknown diameters are written the same way.

use serde::{Deserialize, Serialize};

use crate::database::LinkedApproach;

/// Column order of the CSV output
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// NEO sub-record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: Option<String>,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: Option<bool>,
}

impl NeoRecord {
    fn from_linked(linked: &LinkedApproach<'_>) -> Self {
        match linked.neo() {
            Some(neo) => Self {
                designation: neo.designation().to_string(),
                name: neo.name().map(str::to_string),
                diameter_km: neo.has_known_diameter().then(|| neo.diameter()),
                potentially_hazardous: Some(neo.is_hazardous()),
            },
            None => Self {
                designation: linked.approach().designation().to_string(),
                name: None,
                diameter_km: None,
                potentially_hazardous: None,
            },
        }
    }
}

/// Nested record used by JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord,
}

impl From<LinkedApproach<'_>> for ApproachRecord {
    fn from(linked: LinkedApproach<'_>) -> Self {
        let approach = linked.approach();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            neo: NeoRecord::from_linked(&linked),
        }
    }
}

/// Flat record used by CSV output, fields in `CSV_HEADER` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: Option<String>,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: Option<bool>,
}

impl From<LinkedApproach<'_>> for FlatApproachRecord {
    fn from(linked: LinkedApproach<'_>) -> Self {
        let ApproachRecord {
            datetime_utc,
            distance_au,
            velocity_km_s,
            neo,
        } = ApproachRecord::from(linked);
        Self {
            datetime_utc,
            distance_au,
            velocity_km_s,
            designation: neo.designation,
            name: neo.name,
            diameter_km: neo.diameter_km,
            potentially_hazardous: neo.potentially_hazardous,
        }
    }
}
