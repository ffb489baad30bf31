//! Stage predicates for query execution
//!
//! One predicate per criterion kind. Criteria reading the NEO (diameter,
//! hazardous) never match an orphaned approach.

use crate::database::LinkedApproach;
use crate::planner::Criterion;

/// Evaluates criteria against linked approaches
pub struct StagePredicate;

impl StagePredicate {
    /// Checks if an approach satisfies a single criterion
    pub fn matches(criterion: &Criterion, candidate: &LinkedApproach<'_>) -> bool {
        if criterion.reads_neo() && candidate.is_orphan() {
            return false;
        }

        let approach = candidate.approach();
        match criterion {
            Criterion::Date(bound) => bound.contains(approach.date()),
            Criterion::Distance(bounds) => bounds.contains(approach.distance()),
            Criterion::Velocity(bounds) => bounds.contains(approach.velocity()),
            Criterion::Diameter(bounds) => candidate
                .neo()
                .map_or(false, |neo| bounds.contains(neo.diameter())),
            Criterion::Hazardous(expected) => candidate
                .neo()
                .map_or(false, |neo| neo.is_hazardous() == *expected),
        }
    }

    /// Checks if an approach satisfies every criterion (AND semantics)
    pub fn matches_all<'a>(
        criteria: impl IntoIterator<Item = &'a Criterion>,
        candidate: &LinkedApproach<'_>,
    ) -> bool {
        criteria
            .into_iter()
            .all(|criterion| Self::matches(criterion, candidate))
    }
}
