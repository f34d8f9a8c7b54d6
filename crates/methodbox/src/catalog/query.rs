//! Grouping and filter queries over the catalog

use indexmap::IndexMap;
use tracing::debug;

use super::Catalog;
use crate::method::MethodEntry;
use crate::taxonomy::{Phase, SizeGroup, TimeBudget};

/// A phase/time/size-group triple used to query matching entries.
///
/// Criteria are ephemeral: built per query from the fixed vocabularies,
/// never stored as application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Required process phase
    pub phase: Phase,

    /// Required time budget
    pub time: TimeBudget,

    /// Required group size
    pub size_group: SizeGroup,
}

impl FilterCriteria {
    /// Create criteria from the three required values.
    pub fn new(phase: Phase, time: TimeBudget, size_group: SizeGroup) -> Self {
        Self {
            phase,
            time,
            size_group,
        }
    }

    /// Whether an entry satisfies all three criteria exactly.
    ///
    /// There is no partial matching and no scoring; an entry with a
    /// missing or unrecognized attribute never matches.
    pub fn matches(&self, entry: &MethodEntry) -> bool {
        entry.phase == Some(self.phase)
            && entry.time == Some(self.time)
            && entry.size_group == Some(self.size_group)
    }
}

impl Catalog {
    /// Partition all entries by phase.
    ///
    /// Every recognized phase is present as a key, in process order, so
    /// callers can render empty columns. Within a bucket, identifiers
    /// keep catalog insertion order. Entries with a missing or
    /// unrecognized phase appear in no bucket but stay retrievable
    /// through [`Catalog::get`].
    pub fn group_by_phase(&self) -> IndexMap<Phase, Vec<&str>> {
        let mut buckets: IndexMap<Phase, Vec<&str>> = Phase::ALL
            .iter()
            .map(|&phase| (phase, Vec::new()))
            .collect();
        for (id, entry) in self.iter() {
            if let Some(phase) = entry.phase {
                buckets.entry(phase).or_default().push(id);
            }
        }
        buckets
    }

    /// Return every identifier whose entry matches the criteria.
    ///
    /// Results keep catalog insertion order. An empty result is a valid
    /// outcome, not an error.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&str> {
        let hits: Vec<&str> = self
            .iter()
            .filter(|(_, entry)| criteria.matches(entry))
            .map(|(id, _)| id)
            .collect();
        debug!(
            phase = %criteria.phase,
            time = %criteria.time,
            size_group = %criteria.size_group,
            hits = hits.len(),
            "filter query"
        );
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn criteria() -> FilterCriteria {
        FilterCriteria::new(Phase::Ideate, TimeBudget::Short, SizeGroup::Small)
    }

    fn entry(raw: &str) -> MethodEntry {
        serde_json::from_str(raw).expect("entry should deserialize")
    }

    #[test]
    fn test_matches_requires_all_three_attributes() {
        let full = entry(
            r#"{"title": "A", "phase": "Ideate", "time": "short", "sizeGroup": "small"}"#,
        );
        let wrong_time = entry(
            r#"{"title": "B", "phase": "Ideate", "time": "long", "sizeGroup": "small"}"#,
        );
        let missing_size = entry(r#"{"title": "C", "phase": "Ideate", "time": "short"}"#);

        assert!(criteria().matches(&full));
        assert!(!criteria().matches(&wrong_time));
        assert!(!criteria().matches(&missing_size));
    }

    #[test]
    fn test_group_by_phase_always_yields_six_buckets() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        let buckets = catalog.group_by_phase();

        let phases: Vec<Phase> = buckets.keys().copied().collect();
        assert_eq!(phases, Phase::ALL.to_vec());
        assert!(buckets.values().all(Vec::is_empty));
    }
}
