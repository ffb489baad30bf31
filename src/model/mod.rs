//! Entity model for neodb
//!
//! Defines the two record kinds held by the database:
//!
//! - `NearEarthObject`: physical parameters of an asteroid or comet
//! - `CloseApproach`: a single pass of a NEO near Earth
//!
//! # Links
//!
//! Entities never hold references to each other. A `CloseApproach` stores the
//! `NeoId` of its NEO and a `NearEarthObject` stores the `ApproachId`s of its
//! approaches. Both are indexes into collections owned by `NeoDatabase`, and
//! both are filled exactly once by the linker.

mod approach;
mod neo;
pub mod time;

pub use approach::CloseApproach;
pub use neo::NearEarthObject;
pub use time::{format_approach_time, parse_approach_time, TimeError};

use std::fmt;

/// Handle to a NEO inside a `NeoDatabase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position of the NEO in load order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neo#{}", self.0)
    }
}

/// Handle to a close approach inside a `NeoDatabase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Position of the approach in load order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approach#{}", self.0)
    }
}
