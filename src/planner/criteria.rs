//! User-facing filter criteria
//!
//! Every field is optional; `None` means "don't care". `hazardous` is
//! tri-state so "must not be hazardous" is distinct from "unset".

use chrono::NaiveDate;

/// Optional query criteria as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Approach happened on exactly this date
    pub date: Option<NaiveDate>,
    /// Approach happened on or after this date
    pub start_date: Option<NaiveDate>,
    /// Approach happened on or before this date
    pub end_date: Option<NaiveDate>,
    /// Minimum nominal distance (au)
    pub distance_min: Option<f64>,
    /// Maximum nominal distance (au)
    pub distance_max: Option<f64>,
    /// Minimum relative velocity (km/s)
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity (km/s)
    pub velocity_max: Option<f64>,
    /// Minimum NEO diameter (km)
    pub diameter_min: Option<f64>,
    /// Maximum NEO diameter (km)
    pub diameter_max: Option<f64>,
    /// Required hazard flag of the NEO
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Creates empty criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_distance_min(mut self, value: f64) -> Self {
        self.distance_min = Some(value);
        self
    }

    pub fn with_distance_max(mut self, value: f64) -> Self {
        self.distance_max = Some(value);
        self
    }

    pub fn with_velocity_min(mut self, value: f64) -> Self {
        self.velocity_min = Some(value);
        self
    }

    pub fn with_velocity_max(mut self, value: f64) -> Self {
        self.velocity_max = Some(value);
        self
    }

    pub fn with_diameter_min(mut self, value: f64) -> Self {
        self.diameter_min = Some(value);
        self
    }

    pub fn with_diameter_max(mut self, value: f64) -> Self {
        self.diameter_max = Some(value);
        self
    }

    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
