//! Query execution subsystem for neodb
//!
//! Consumes a `FilterSpec` and produces a lazy stream of linked approaches.
//!
//! # Execution Flow (strict order)
//!
//! 1. Short-circuit conflicted specifications to an empty stream
//! 2. Narrow by date
//! 3. Narrow by distance
//! 4. Narrow by velocity
//! 5. Narrow by NEO diameter
//! 6. Narrow by NEO hazard flag
//!
//! Only stages for criteria present in the specification run.
//!
//! # Invariants
//!
//! - Results follow the load order of the approach collection
//! - Nothing is materialized; callers may stop pulling at any time
//! - Orphaned approaches never satisfy diameter or hazard criteria

mod executor;
mod filters;
mod limit;

pub use executor::{QueryEngine, QueryResults};
pub use filters::StagePredicate;
pub use limit::limit;
