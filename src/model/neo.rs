//! Near-Earth object entity

use std::fmt;

use super::ApproachId;

/// A near-Earth object (NEO)
///
/// Holds the primary designation (unique key), an optional IAU name, the
/// diameter in kilometers (NaN when unknown) and the potentially-hazardous
/// flag. The approach list is empty until the owning database links it.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    pub(crate) approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an unnamed NEO of unknown diameter that is not hazardous.
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            name: None,
            diameter: f64::NAN,
            hazardous: false,
            approaches: Vec::new(),
        }
    }

    /// Sets the IAU name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the diameter in kilometers
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the potentially-hazardous flag
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Primary designation. Empty means the record has no identity.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name. An empty name is reported as `None`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Diameter in kilometers, NaN when unknown
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns true if the diameter is known
    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Returns true if the NEO is potentially hazardous
    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// Handles of this NEO's close approaches
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `"433 (Eros)"`, or just the designation when unnamed
    pub fn fullname(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        if self.has_known_diameter() {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.fullname(),
                self.diameter,
                hazard
            )
        } else {
            write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous.",
                self.fullname(),
                hazard
            )
        }
    }
}
