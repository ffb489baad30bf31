//! Exact-match NEO lookup index
//!
//! Built once from the NEO collection in load order. The first NEO to carry a
//! designation or name owns it; later duplicates are unreachable through the
//! index. Empty keys are never indexed.

use std::collections::HashMap;

use crate::model::{NearEarthObject, NeoId};

/// In-memory designation and name index over a NEO collection
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    /// Primary designation -> first NEO carrying it
    by_designation: HashMap<String, NeoId>,

    /// IAU name -> first NEO carrying it
    by_name: HashMap<String, NeoId>,

    /// Designations seen more than once
    duplicate_designations: usize,
}

impl LookupIndex {
    /// Builds the index from NEOs in load order.
    pub fn build(neos: &[NearEarthObject]) -> Self {
        let mut index = Self::default();

        for (position, neo) in neos.iter().enumerate() {
            let id = NeoId(position);

            if !neo.designation().is_empty() {
                if index.by_designation.contains_key(neo.designation()) {
                    index.duplicate_designations += 1;
                } else {
                    index
                        .by_designation
                        .insert(neo.designation().to_string(), id);
                }
            }

            // name() already hides empty names
            if let Some(name) = neo.name() {
                index.by_name.entry(name.to_string()).or_insert(id);
            }
        }

        index
    }

    /// Exact, case-sensitive designation lookup
    pub fn lookup_designation(&self, designation: &str) -> Option<NeoId> {
        if designation.is_empty() {
            return None;
        }
        self.by_designation.get(designation).copied()
    }

    /// Exact, case-sensitive name lookup. `""` never matches.
    pub fn lookup_name(&self, name: &str) -> Option<NeoId> {
        if name.is_empty() {
            return None;
        }
        self.by_name.get(name).copied()
    }

    /// Number of distinct indexed designations
    pub fn designation_count(&self) -> usize {
        self.by_designation.len()
    }

    /// Number of distinct indexed names
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    /// Number of NEOs shadowed by an earlier NEO with the same designation
    pub fn duplicate_designations(&self) -> usize {
        self.duplicate_designations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NearEarthObject> {
        vec![
            NearEarthObject::new("433").with_name(Some("Eros".into())),
            NearEarthObject::new("2020 AB"),
            NearEarthObject::new("").with_name(Some("Ghost".into())),
            NearEarthObject::new("1036").with_name(Some(String::new())),
            NearEarthObject::new("433").with_name(Some("Impostor".into())),
        ]
    }

    #[test]
    fn test_designation_lookup() {
        let index = LookupIndex::build(&sample());
        assert_eq!(index.lookup_designation("433"), Some(NeoId(0)));
        assert_eq!(index.lookup_designation("2020 AB"), Some(NeoId(1)));
        assert_eq!(index.lookup_designation("2020 ab"), None);
        assert_eq!(index.lookup_designation(" 433"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let index = LookupIndex::build(&sample());
        assert_eq!(index.lookup_designation("433"), Some(NeoId(0)));
        assert_eq!(index.duplicate_designations(), 1);
        // The shadowed NEO's own name is still indexed
        assert_eq!(index.lookup_name("Impostor"), Some(NeoId(4)));
    }

    #[test]
    fn test_empty_keys_never_match() {
        let index = LookupIndex::build(&sample());
        assert_eq!(index.lookup_designation(""), None);
        assert_eq!(index.lookup_name(""), None);
    }

    #[test]
    fn test_nameless_designation_still_indexed() {
        let index = LookupIndex::build(&sample());
        assert_eq!(index.lookup_name("Ghost"), Some(NeoId(2)));
        assert_eq!(index.lookup_designation("1036"), Some(NeoId(3)));
        assert_eq!(index.name_count(), 3);
        assert_eq!(index.designation_count(), 3);
    }
}
