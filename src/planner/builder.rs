//! Criteria -> filter specification
//!
//! Validation runs before anything is included. Any inverted pair or
//! non-finite numeric bound turns the whole specification into a conflict
//! and all other criteria are dropped.
//! Criteria with no bounds at all are omitted rather than kept as
//! always-true stages.

use super::criteria::Criteria;
use super::spec::{
    Bounds, Conflict, ConflictIssue, Criterion, CriterionKind, DateBound, FilterSpec,
};

/// Translates `Criteria` into a `FilterSpec`
pub struct FilterBuilder;

impl FilterBuilder {
    /// Builds a specification, detecting contradictory ranges up front.
    ///
    /// An exact `date` takes precedence over `start_date`/`end_date`, but an
    /// inverted start/end pair is still reported.
    pub fn build(criteria: &Criteria) -> FilterSpec {
        let issues = Self::find_conflicts(criteria);
        if !issues.is_empty() {
            return FilterSpec::Conflicted(Conflict::new(issues));
        }

        let mut active = Vec::with_capacity(CriterionKind::STAGE_ORDER.len());

        if let Some(bound) = Self::date_bound(criteria) {
            active.push(Criterion::Date(bound));
        }
        if let Some(b) = Bounds::new(criteria.distance_min, criteria.distance_max) {
            active.push(Criterion::Distance(b));
        }
        if let Some(b) = Bounds::new(criteria.velocity_min, criteria.velocity_max) {
            active.push(Criterion::Velocity(b));
        }
        if let Some(b) = Bounds::new(criteria.diameter_min, criteria.diameter_max) {
            active.push(Criterion::Diameter(b));
        }
        if let Some(hazardous) = criteria.hazardous {
            active.push(Criterion::Hazardous(hazardous));
        }

        FilterSpec::from_criteria(active)
    }

    fn date_bound(criteria: &Criteria) -> Option<DateBound> {
        if let Some(on) = criteria.date {
            return Some(DateBound::On(on));
        }
        match (criteria.start_date, criteria.end_date) {
            (Some(start), Some(end)) => Some(DateBound::Between { start, end }),
            (Some(start), None) => Some(DateBound::From(start)),
            (None, Some(end)) => Some(DateBound::Until(end)),
            (None, None) => None,
        }
    }

    /// Every inverted pair, in stage order
    fn find_conflicts(criteria: &Criteria) -> Vec<ConflictIssue> {
        let mut issues = Vec::new();

        if let (Some(start), Some(end)) = (criteria.start_date, criteria.end_date) {
            if end < start {
                issues.push(ConflictIssue {
                    kind: CriterionKind::Date,
                    message: format!(
                        "end date ({}) cannot be earlier than start date ({})",
                        end, start
                    ),
                });
            }
        }

        let ranges = [
            (
                CriterionKind::Distance,
                criteria.distance_min,
                criteria.distance_max,
            ),
            (
                CriterionKind::Velocity,
                criteria.velocity_min,
                criteria.velocity_max,
            ),
            (
                CriterionKind::Diameter,
                criteria.diameter_min,
                criteria.diameter_max,
            ),
        ];

        for (kind, min, max) in ranges {
            let Some(bounds) = Bounds::new(min, max) else {
                continue;
            };
            for (side, value) in [("min", bounds.min()), ("max", bounds.max())] {
                if let Some(value) = value.filter(|v| !v.is_finite()) {
                    issues.push(ConflictIssue {
                        kind,
                        message: format!("{side} {kind} ({value}) must be a finite number"),
                    });
                }
            }
            if let (true, Some(min), Some(max)) = (bounds.is_inverted(), bounds.min(), bounds.max())
            {
                issues.push(ConflictIssue {
                    kind,
                    message: format!("max {kind} ({max}) cannot be less than min {kind} ({min})"),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_criteria_empty_spec() {
        let spec = FilterBuilder::build(&Criteria::new());
        assert!(spec.is_unfiltered());
    }

    #[test]
    fn test_exact_date_wins() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_date(d(2020, 1, 1))
                .with_start_date(d(2019, 1, 1)),
        );
        assert_eq!(
            spec.get(CriterionKind::Date),
            Some(&Criterion::Date(DateBound::On(d(2020, 1, 1))))
        );
    }

    #[test]
    fn test_date_range_shapes() {
        let from = FilterBuilder::build(&Criteria::new().with_start_date(d(2020, 1, 1)));
        assert_eq!(
            from.get(CriterionKind::Date),
            Some(&Criterion::Date(DateBound::From(d(2020, 1, 1))))
        );

        let until = FilterBuilder::build(&Criteria::new().with_end_date(d(2020, 1, 1)));
        assert_eq!(
            until.get(CriterionKind::Date),
            Some(&Criterion::Date(DateBound::Until(d(2020, 1, 1))))
        );

        let between = FilterBuilder::build(
            &Criteria::new()
                .with_start_date(d(2020, 1, 1))
                .with_end_date(d(2020, 1, 1)),
        );
        assert!(!between.is_conflicted());
    }

    #[test]
    fn test_inverted_dates_conflict() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_start_date(d(2020, 2, 1))
                .with_end_date(d(2020, 1, 1))
                .with_hazardous(true),
        );
        let conflict = spec.conflict().unwrap();
        assert_eq!(conflict.kinds().collect::<Vec<_>>(), vec![CriterionKind::Date]);
        assert!(conflict.message().contains("2020-01-01"));
        assert!(conflict.message().contains("2020-02-01"));
        assert_eq!(spec.criteria().count(), 0);
    }

    #[test]
    fn test_inverted_dates_conflict_despite_exact_date() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_date(d(2020, 1, 15))
                .with_start_date(d(2020, 2, 1))
                .with_end_date(d(2020, 1, 1)),
        );
        assert!(spec.is_conflicted());
    }

    #[test]
    fn test_inverted_distance_conflict() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_distance_min(5.0)
                .with_distance_max(3.0),
        );
        let conflict = spec.conflict().unwrap();
        assert_eq!(
            conflict.message(),
            "max distance (3) cannot be less than min distance (5)"
        );
    }

    #[test]
    fn test_all_conflicts_reported() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_velocity_min(10.0)
                .with_velocity_max(1.0)
                .with_diameter_min(2.0)
                .with_diameter_max(1.0),
        );
        let kinds: Vec<_> = spec.conflict().unwrap().kinds().collect();
        assert_eq!(kinds, vec![CriterionKind::Velocity, CriterionKind::Diameter]);
    }

    #[test]
    fn test_non_finite_bound_conflicts() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_distance_min(f64::NAN)
                .with_distance_max(3.0)
                .with_velocity_max(f64::INFINITY),
        );
        let conflict = spec.conflict().unwrap();
        assert_eq!(
            conflict.kinds().collect::<Vec<_>>(),
            vec![CriterionKind::Distance, CriterionKind::Velocity]
        );
        assert_eq!(
            conflict.issues()[0].message,
            "min distance (NaN) must be a finite number"
        );
        assert_eq!(conflict.issues()[1].message, "max velocity (inf) must be a finite number");
    }

    #[test]
    fn test_zero_is_a_real_bound() {
        let spec = FilterBuilder::build(&Criteria::new().with_distance_min(0.0));
        assert_eq!(
            spec.get(CriterionKind::Distance),
            Some(&Criterion::Distance(Bounds::at_least(0.0)))
        );
    }

    #[test]
    fn test_hazardous_tri_state() {
        let unset = FilterBuilder::build(&Criteria::new());
        assert!(unset.get(CriterionKind::Hazardous).is_none());

        let not = FilterBuilder::build(&Criteria::new().with_hazardous(false));
        assert_eq!(
            not.get(CriterionKind::Hazardous),
            Some(&Criterion::Hazardous(false))
        );
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let spec = FilterBuilder::build(
            &Criteria::new()
                .with_velocity_min(3.0)
                .with_velocity_max(3.0),
        );
        assert_eq!(spec.len(), 1);
    }
}
