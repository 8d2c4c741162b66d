//! Candidate set value object

use super::{Catalog, CharacterId};
use serde::{Deserialize, Serialize};

/// The characters still consistent with every answer given so far.
///
/// Always a subsequence of its catalog: ids are kept sorted and unique, so
/// narrowing can only drop entries, never reorder or add them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateSet(Vec<CharacterId>);

impl CandidateSet {
    /// Every character in the catalog
    pub fn all(catalog: &Catalog) -> Self {
        Self(catalog.ids().collect())
    }

    pub fn from_ids(ids: impl IntoIterator<Item = CharacterId>) -> Self {
        let mut ids: Vec<_> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[CharacterId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    /// The only remaining candidate, if exactly one is left
    pub fn single(&self) -> Option<CharacterId> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// A narrowed copy keeping the candidates matching `keep`
    pub fn retain_where(&self, mut keep: impl FnMut(CharacterId) -> bool) -> Self {
        Self(self.0.iter().copied().filter(|id| keep(*id)).collect())
    }

    pub fn is_subset_of(&self, other: &CandidateSet) -> bool {
        self.0.iter().all(|id| other.contains(*id))
    }

    /// Names of the remaining candidates, in catalog order
    pub fn names<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter_map(|id| catalog.get(*id))
            .map(|c| c.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_sorts_and_dedups() {
        let set = CandidateSet::from_ids([CharacterId(3), CharacterId(1), CharacterId(3)]);
        assert_eq!(set.ids(), &[CharacterId(1), CharacterId(3)]);
    }

    #[test]
    fn test_single() {
        assert_eq!(CandidateSet::default().single(), None);
        assert_eq!(
            CandidateSet::from_ids([CharacterId(4)]).single(),
            Some(CharacterId(4))
        );
        assert_eq!(
            CandidateSet::from_ids([CharacterId(0), CharacterId(1)]).single(),
            None
        );
    }

    #[test]
    fn test_retain_where_keeps_order_and_subset() {
        let set = CandidateSet::from_ids((0..6).map(CharacterId));
        let even = set.retain_where(|id| id.0 % 2 == 0);

        assert_eq!(
            even.ids(),
            &[CharacterId(0), CharacterId(2), CharacterId(4)]
        );
        assert!(even.is_subset_of(&set));
        assert!(!set.is_subset_of(&even));
    }
}
