//! Observability events for neodb
//!
//! Events are explicit and typed. Each maps to a stable upper-case name used
//! as the `event` field of the emitted log line.

use std::fmt;

/// Observable events in neodb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// NEO records loaded from disk
    NeosLoaded,
    /// Close-approach records loaded from disk
    ApproachesLoaded,
    /// Loading failed
    LoadFailed,

    // Database
    /// Linker pass complete
    DatabaseLinked,
    /// Duplicate designations detected while indexing
    DuplicateDesignations,

    // Lookup
    /// NEO lookup resolved
    LookupHit,
    /// NEO lookup found nothing
    LookupMiss,

    // Query
    /// Criteria normalized into a filter specification
    QueryPlanned,
    /// Specification carries a conflict, query short-circuited
    QueryRejected,

    // Output
    /// Results written to a file
    ResultsWritten,
}

impl Event {
    /// Returns the stable event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::NeosLoaded => "NEOS_LOADED",
            Event::ApproachesLoaded => "APPROACHES_LOADED",
            Event::LoadFailed => "LOAD_FAILED",
            Event::DatabaseLinked => "DATABASE_LINKED",
            Event::DuplicateDesignations => "DUPLICATE_DESIGNATIONS",
            Event::LookupHit => "LOOKUP_HIT",
            Event::LookupMiss => "LOOKUP_MISS",
            Event::QueryPlanned => "QUERY_PLANNED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::ResultsWritten => "RESULTS_WRITTEN",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::LoadFailed)
    }

    /// Returns true if this event deserves operator attention
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::DuplicateDesignations | Event::QueryRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::DatabaseLinked.as_str(), "DATABASE_LINKED");
        assert_eq!(Event::QueryRejected.to_string(), "QUERY_REJECTED");
    }

    #[test]
    fn test_event_classes() {
        assert!(Event::LoadFailed.is_failure());
        assert!(!Event::NeosLoaded.is_failure());
        assert!(Event::QueryRejected.is_warning());
        assert!(!Event::QueryPlanned.is_warning());
    }
}
