//! Linked view of a close approach

use std::fmt;

use crate::model::{CloseApproach, NearEarthObject};

/// A close approach paired with its resolved NEO
///
/// Produced by `NeoDatabase` and by query execution. `neo` is `None` for
/// orphaned approaches.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'db> {
    approach: &'db CloseApproach,
    neo: Option<&'db NearEarthObject>,
}

impl<'db> LinkedApproach<'db> {
    pub(crate) fn new(approach: &'db CloseApproach, neo: Option<&'db NearEarthObject>) -> Self {
        Self { approach, neo }
    }

    /// The approach itself
    pub fn approach(&self) -> &'db CloseApproach {
        self.approach
    }

    /// The approaching NEO, if linked
    pub fn neo(&self) -> Option<&'db NearEarthObject> {
        self.neo
    }

    /// Returns true if the approach has no NEO
    pub fn is_orphan(&self) -> bool {
        self.neo.is_none()
    }

    /// Full name of the NEO, or the raw designation for orphans
    pub fn fullname(&self) -> String {
        match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation().to_string(),
        }
    }
}

impl PartialEq for LinkedApproach<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.approach, other.approach)
    }
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}
