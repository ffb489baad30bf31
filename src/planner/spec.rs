//! Normalized filter specification
//!
//! A closed set of criterion kinds, each with its own bound shape. The
//! specification either holds the active criteria keyed by kind or a
//! conflict that forces an empty result.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// Criterion kinds, ordered as query stages run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CriterionKind {
    Date,
    Distance,
    Velocity,
    Diameter,
    Hazardous,
}

impl CriterionKind {
    /// All kinds in stage order
    pub const STAGE_ORDER: [CriterionKind; 5] = [
        CriterionKind::Date,
        CriterionKind::Distance,
        CriterionKind::Velocity,
        CriterionKind::Diameter,
        CriterionKind::Hazardous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Date => "date",
            CriterionKind::Distance => "distance",
            CriterionKind::Velocity => "velocity",
            CriterionKind::Diameter => "diameter",
            CriterionKind::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar-date constraint on an approach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Exactly this date
    On(NaiveDate),
    /// Inclusive range
    Between { start: NaiveDate, end: NaiveDate },
    /// On or after
    From(NaiveDate),
    /// On or before
    Until(NaiveDate),
}

impl DateBound {
    /// Returns true if `date` satisfies the bound
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DateBound::On(on) => date == on,
            DateBound::Between { start, end } => start <= date && date <= end,
            DateBound::From(start) => date >= start,
            DateBound::Until(end) => date <= end,
        }
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::On(on) => write!(f, "= {}", on),
            DateBound::Between { start, end } => write!(f, "in [{}, {}]", start, end),
            DateBound::From(start) => write!(f, ">= {}", start),
            DateBound::Until(end) => write!(f, "<= {}", end),
        }
    }
}

/// Inclusive numeric bounds with at least one side present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Option<f64>,
    max: Option<f64>,
}

impl Bounds {
    /// Returns `None` when both sides are absent.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound, if any
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound, if any
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns true if max < min
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if max < min)
    }

    /// Returns true if `value` lies within the bounds. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= value && value <= max,
            (Some(min), None) => value >= min,
            (None, Some(max)) => value <= max,
            (None, None) => !value.is_nan(),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "in [{}, {}]", min, max),
            (Some(min), None) => write!(f, ">= {}", min),
            (None, Some(max)) => write!(f, "<= {}", max),
            (None, None) => write!(f, "any"),
        }
    }
}

/// A single normalized criterion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    Date(DateBound),
    Distance(Bounds),
    Velocity(Bounds),
    Diameter(Bounds),
    Hazardous(bool),
}

impl Criterion {
    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::Date(_) => CriterionKind::Date,
            Criterion::Distance(_) => CriterionKind::Distance,
            Criterion::Velocity(_) => CriterionKind::Velocity,
            Criterion::Diameter(_) => CriterionKind::Diameter,
            Criterion::Hazardous(_) => CriterionKind::Hazardous,
        }
    }

    /// Returns true if evaluating this criterion needs the linked NEO
    pub fn reads_neo(&self) -> bool {
        matches!(self, Criterion::Diameter(_) | Criterion::Hazardous(_))
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Date(b) => write!(f, "date {}", b),
            Criterion::Distance(b) => write!(f, "distance {}", b),
            Criterion::Velocity(b) => write!(f, "velocity {}", b),
            Criterion::Diameter(b) => write!(f, "diameter {}", b),
            Criterion::Hazardous(h) => write!(f, "hazardous = {}", h),
        }
    }
}

/// One inconsistent pair of bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictIssue {
    pub kind: CriterionKind,
    pub message: String,
}

/// Mutually contradictory criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    issues: Vec<ConflictIssue>,
}

impl Conflict {
    pub(crate) fn new(issues: Vec<ConflictIssue>) -> Self {
        Self { issues }
    }

    /// Every inconsistency found, in stage order
    pub fn issues(&self) -> &[ConflictIssue] {
        &self.issues
    }

    /// Kinds that conflicted
    pub fn kinds(&self) -> impl Iterator<Item = CriterionKind> + '_ {
        self.issues.iter().map(|i| i.kind)
    }

    /// Human-readable description of all issues
    pub fn message(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Filter specification consumed by the query engine
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpec {
    /// Criteria to apply, at most one per kind, iterated in stage order
    Active(BTreeMap<CriterionKind, Criterion>),
    /// Inconsistent criteria; the query yields nothing
    Conflicted(Conflict),
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::Active(BTreeMap::new())
    }
}

impl FilterSpec {
    /// Builds an active specification from criteria. A later criterion of
    /// the same kind replaces an earlier one.
    pub fn from_criteria(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        FilterSpec::Active(criteria.into_iter().map(|c| (c.kind(), c)).collect())
    }

    /// Returns true if the specification carries a conflict
    pub fn is_conflicted(&self) -> bool {
        matches!(self, FilterSpec::Conflicted(_))
    }

    /// The conflict, if any
    pub fn conflict(&self) -> Option<&Conflict> {
        match self {
            FilterSpec::Conflicted(c) => Some(c),
            FilterSpec::Active(_) => None,
        }
    }

    /// Active criteria in stage order; empty when conflicted
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> + '_ {
        let map = match self {
            FilterSpec::Active(map) => Some(map),
            FilterSpec::Conflicted(_) => None,
        };
        map.into_iter().flat_map(|m| m.values())
    }

    /// Active criterion of a kind
    pub fn get(&self, kind: CriterionKind) -> Option<&Criterion> {
        match self {
            FilterSpec::Active(map) => map.get(&kind),
            FilterSpec::Conflicted(_) => None,
        }
    }

    /// Number of active criteria
    pub fn len(&self) -> usize {
        match self {
            FilterSpec::Active(map) => map.len(),
            FilterSpec::Conflicted(_) => 0,
        }
    }

    /// Returns true if the specification filters nothing out
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, FilterSpec::Active(map) if map.is_empty())
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Conflicted(c) => write!(f, "CONFLICT: {}", c),
            FilterSpec::Active(map) if map.is_empty() => write!(f, "all approaches"),
            FilterSpec::Active(map) => {
                let parts: Vec<String> = map.values().map(|c| c.to_string()).collect();
                write!(f, "{}", parts.join(" AND "))
            }
        }
    }
}
