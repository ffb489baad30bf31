//! Database subsystem for neodb
//!
//! `NeoDatabase` is the composition root. It owns both record collections,
//! builds the lookup index and runs the linker exactly once at construction.
//! There is no insert or delete API; the database is read-only afterwards and
//! may be shared freely for reads.
//!
//! # Construction Flow (strict order)
//!
//! 1. Build the designation/name index over the NEOs
//! 2. Link every approach to the NEO owning its designation
//! 3. Log the link report

mod database;
mod linked;
mod linker;

pub use database::NeoDatabase;
pub use linked::LinkedApproach;
pub use linker::{link, LinkReport};
