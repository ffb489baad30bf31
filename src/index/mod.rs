//! Lookup index subsystem for neodb
//!
//! Indexes are derived, in-memory-only state built once from the NEO
//! collection when the database is constructed.
//!
//! # Invariants
//!
//! - Lookups are exact: case- and whitespace-sensitive
//! - First occurrence wins when keys repeat
//! - Empty designations and empty or absent names are never indexed

mod lookup;

pub use lookup::LookupIndex;
