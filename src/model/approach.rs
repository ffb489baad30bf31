//! Close approach entity

use chrono::{NaiveDate, NaiveDateTime};

use super::time::format_approach_time;
use super::NeoId;

/// A close approach to Earth by a NEO
///
/// `designation` is the foreign key into the NEO collection. The resolved
/// `NeoId` stays `None` until linking, and for orphans after linking.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates an unlinked approach with zero distance and velocity.
    pub fn new(designation: impl Into<String>, time: NaiveDateTime) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance: 0.0,
            velocity: 0.0,
            neo: None,
        }
    }

    /// Sets the nominal approach distance in astronomical units
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the relative approach velocity in km/s
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Designation of the approaching NEO
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Time of closest approach (UTC)
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Calendar date of closest approach (UTC)
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Nominal approach distance in astronomical units
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Resolved NEO, `None` before linking or when orphaned
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Returns true if linking resolved this approach's NEO
    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Approach time formatted at minute precision
    pub fn time_str(&self) -> String {
        format_approach_time(&self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_approach_time;

    #[test]
    fn test_defaults() {
        let time = parse_approach_time("2015-Jan-01 12:00").unwrap();
        let ca = CloseApproach::new("433", time);
        assert_eq!(ca.designation(), "433");
        assert_eq!(ca.distance(), 0.0);
        assert_eq!(ca.velocity(), 0.0);
        assert_eq!(ca.neo(), None);
        assert!(!ca.is_linked());
    }

    #[test]
    fn test_time_accessors() {
        let time = parse_approach_time("2015-Jan-01 12:00").unwrap();
        let ca = CloseApproach::new("433", time)
            .with_distance(0.25)
            .with_velocity(5.5);
        assert_eq!(ca.date(), NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(ca.time_str(), "2015-01-01 12:00");
        assert_eq!(ca.distance(), 0.25);
        assert_eq!(ca.velocity(), 5.5);
    }
}
