//! Filter planning subsystem for neodb
//!
//! Turns optional user criteria into a normalized `FilterSpec` for the
//! query engine.
//!
//! # Design Principles
//!
//! - Closed: one enum variant per criterion kind, no string keys
//! - Explicit: unset criteria are omitted, never kept as always-true stages
//! - Fail early: contradictory ranges are detected before any filtering and
//!   replace the whole specification with a conflict
//!
//! # Stage Order (strict)
//!
//! date, distance, velocity, diameter, hazardous

mod builder;
mod criteria;
mod spec;

pub use builder::FilterBuilder;
pub use criteria::Criteria;
pub use spec::{
    Bounds, Conflict, ConflictIssue, Criterion, CriterionKind, DateBound, FilterSpec,
};
