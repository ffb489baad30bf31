//! NEO database: owns, links and serves both record collections

use crate::executor::{QueryEngine, QueryResults};
use crate::index::LookupIndex;
use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use crate::observability::{log_event_with_fields, Event};
use crate::planner::FilterSpec;

use super::linked::LinkedApproach;
use super::linker::{link, LinkReport};

/// A database of NEOs and their close approaches
///
/// Constructed once from two unlinked collections; immutable afterwards.
#[derive(Debug, Clone)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    index: LookupIndex,
    report: LinkReport,
}

impl NeoDatabase {
    /// Creates a database and links the collections.
    ///
    /// Each approach's designation is resolved against the NEO designations.
    /// Afterwards every NEO lists its approaches and every resolvable
    /// approach points back at its NEO.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let index = LookupIndex::build(&neos);
        let report = link(&index, &mut neos, &mut approaches);

        if index.duplicate_designations() > 0 {
            log_event_with_fields(
                Event::DuplicateDesignations,
                &[("count", &index.duplicate_designations().to_string())],
            );
        }
        log_event_with_fields(
            Event::DatabaseLinked,
            &[
                ("neos", &neos.len().to_string()),
                ("linked", &report.linked.to_string()),
                ("orphaned", &report.orphaned.to_string()),
            ],
        );

        Self {
            neos,
            approaches,
            index,
            report,
        }
    }

    /// All NEOs in load order
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches in load order
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Result of the construction-time linker pass
    pub fn link_report(&self) -> LinkReport {
        self.report
    }

    /// NEO by handle
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.index())
    }

    /// Close approach by handle
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.index())
    }

    /// The approaches of `neo`, in load order
    pub fn approaches_of<'db>(
        &'db self,
        neo: &'db NearEarthObject,
    ) -> impl Iterator<Item = &'db CloseApproach> + 'db {
        neo.approaches()
            .iter()
            .filter_map(move |id| self.approach(*id))
    }

    /// Pairs an approach with its resolved NEO
    pub fn linked<'db>(&'db self, approach: &'db CloseApproach) -> LinkedApproach<'db> {
        LinkedApproach::new(approach, approach.neo().and_then(|id| self.neo(id)))
    }

    /// Every approach with its NEO, in load order
    pub fn linked_approaches(&self) -> impl Iterator<Item = LinkedApproach<'_>> + '_ {
        self.approaches.iter().map(move |ca| self.linked(ca))
    }

    /// Finds a NEO by exact primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.index
            .lookup_designation(designation)
            .and_then(|id| self.neo(id))
    }

    /// Finds a NEO by exact name. Empty names never match.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.index.lookup_name(name).and_then(|id| self.neo(id))
    }

    /// Lazily yields the approaches matching `spec`, in load order.
    pub fn query<'db>(&'db self, spec: &FilterSpec) -> QueryResults<'db> {
        QueryEngine::new(self).execute(spec)
    }
}
