//! Query engine for neodb
//!
//! Applies a `FilterSpec` to the linked approach set.
//!
//! Execution flow (strict order):
//! 1. Conflicted specification: yield nothing, touch nothing
//! 2. Start from every approach in load order
//! 3. Chain one lazy narrowing stage per active criterion, in stage order
//! 4. Hand the chain to the caller, who pulls as many results as needed
//!
//! An approach rejected by an earlier stage is never seen by a later one.

use crate::database::{LinkedApproach, NeoDatabase};
use crate::planner::{Criterion, FilterSpec};

use super::filters::StagePredicate;

type Stream<'db> = Box<dyn Iterator<Item = LinkedApproach<'db>> + 'db>;

/// Lazy sequence of query results, in load order
pub struct QueryResults<'db> {
    inner: Stream<'db>,
    stages: usize,
}

impl<'db> QueryResults<'db> {
    fn empty() -> Self {
        Self {
            inner: Box::new(std::iter::empty()),
            stages: 0,
        }
    }

    /// Number of narrowing stages applied
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<'db> Iterator for QueryResults<'db> {
    type Item = LinkedApproach<'db>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Query engine bound to one database
pub struct QueryEngine<'db> {
    db: &'db NeoDatabase,
}

impl<'db> QueryEngine<'db> {
    /// Creates a new engine
    pub fn new(db: &'db NeoDatabase) -> Self {
        Self { db }
    }

    /// Executes `spec` by staged narrowing.
    pub fn execute(&self, spec: &FilterSpec) -> QueryResults<'db> {
        let Some(criteria) = Self::active_criteria(spec) else {
            return QueryResults::empty();
        };

        let stages = criteria.len();
        let mut stream: Stream<'db> = Box::new(self.db.linked_approaches());
        for criterion in criteria {
            stream = Box::new(
                stream.filter(move |candidate| StagePredicate::matches(&criterion, candidate)),
            );
        }

        QueryResults {
            inner: stream,
            stages,
        }
    }

    /// Executes `spec` as one pass testing the conjunction of all criteria.
    ///
    /// Yields the same sequence as `execute`.
    pub fn execute_conjunctive(&self, spec: &FilterSpec) -> QueryResults<'db> {
        let Some(criteria) = Self::active_criteria(spec) else {
            return QueryResults::empty();
        };

        let stream = self
            .db
            .linked_approaches()
            .filter(move |candidate| StagePredicate::matches_all(&criteria, candidate));

        QueryResults {
            inner: Box::new(stream),
            stages: 1,
        }
    }

    /// Criteria in stage order, `None` when the query must short-circuit
    fn active_criteria(spec: &FilterSpec) -> Option<Vec<Criterion>> {
        match spec {
            FilterSpec::Conflicted(_) => None,
            FilterSpec::Active(map) => Some(map.values().copied().collect()),
        }
    }
}
