//! One-time NEO <-> close approach linking
//!
//! Resolves each approach through the designation index in a single pass,
//! O(N + M). Approaches with no matching NEO stay unlinked (orphans). When
//! designations repeat, the first NEO in load order receives the approaches,
//! matching what `LookupIndex` returns for that designation.

use crate::index::LookupIndex;
use crate::model::{ApproachId, CloseApproach, NearEarthObject};

/// Outcome of a linker pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Approaches resolved to a NEO
    pub linked: usize,
    /// Approaches whose designation matched no NEO
    pub orphaned: usize,
}

impl LinkReport {
    /// Total approaches seen
    pub fn total(&self) -> usize {
        self.linked + self.orphaned
    }
}

/// Links `approaches` to `neos`, mutating both in place.
///
/// `index` must have been built from `neos`. Any existing links are
/// discarded first, so the post-condition holds regardless of input state.
pub fn link(
    index: &LookupIndex,
    neos: &mut [NearEarthObject],
    approaches: &mut [CloseApproach],
) -> LinkReport {
    for neo in neos.iter_mut() {
        neo.approaches.clear();
    }

    let mut report = LinkReport::default();

    for (position, approach) in approaches.iter_mut().enumerate() {
        match index.lookup_designation(approach.designation()) {
            Some(neo_id) => {
                approach.neo = Some(neo_id);
                neos[neo_id.index()].approaches.push(ApproachId(position));
                report.linked += 1;
            }
            None => {
                approach.neo = None;
                report.orphaned += 1;
            }
        }
    }

    report
}
