//! Question selection.
//!
//! Picks the attribute whose answer splits the remaining candidates most
//! evenly.
//!
//! # Algorithm
//!
//! 1. Skip attributes already asked.
//! 2. Partition the candidates by their stored value for the attribute.
//!    Candidates lacking the attribute form their own "absent" bucket.
//! 3. Skip attributes with fewer than two non-empty buckets: every
//!    candidate agrees, so asking yields nothing.
//! 4. Score = largest bucket - smallest bucket. Lowest score wins.
//! 5. Ties go to the lexicographically smallest attribute name.

use super::strategy::QuestionStrategy;
use super::value_objects::Question;
use crate::catalog::{CandidateSet, Catalog};
use std::collections::{BTreeMap, BTreeSet};

/// Bucket sizes of a candidate partition, keyed by stored value
/// (`None` is the absent bucket).
pub type Partition<'a> = BTreeMap<Option<&'a str>, usize>;

/// Partition `candidates` by their value for `attribute`
pub fn partition<'a>(
    catalog: &'a Catalog,
    candidates: &CandidateSet,
    attribute: &str,
) -> Partition<'a> {
    let mut buckets = Partition::new();
    for id in candidates.iter() {
        *buckets.entry(catalog.value(id, attribute)).or_default() += 1;
    }
    buckets
}

/// Balance score of asking about `attribute`, `None` if it cannot split
/// the candidates.
pub fn balance_score(catalog: &Catalog, candidates: &CandidateSet, attribute: &str) -> Option<usize> {
    let buckets = partition(catalog, candidates, attribute);
    if buckets.len() < 2 {
        return None;
    }
    let largest = buckets.values().copied().max()?;
    let smallest = buckets.values().copied().min()?;
    Some(largest - smallest)
}

/// Selects the next question under one [`QuestionStrategy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionSelector {
    strategy: QuestionStrategy,
}

impl QuestionSelector {
    pub fn new(strategy: QuestionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> QuestionStrategy {
        self.strategy
    }

    /// Pick the next question, or `None` when no unasked attribute can
    /// split the candidates any further.
    pub fn select_next(
        &self,
        catalog: &Catalog,
        candidates: &CandidateSet,
        asked: &BTreeSet<String>,
    ) -> Option<Question> {
        let mut best: Option<(&str, usize)> = None;

        // The domain is a BTreeSet, so iteration is already in tie-break order
        // and only a strictly better score replaces the incumbent.
        for attribute in catalog.attribute_domain() {
            if asked.contains(attribute) {
                continue;
            }
            let Some(score) = balance_score(catalog, candidates, attribute) else {
                continue;
            };
            match best {
                Some((_, best_score)) if best_score <= score => {}
                _ => best = Some((attribute.as_str(), score)),
            }
        }

        let (attribute, _) = best?;
        match self.strategy {
            QuestionStrategy::Ternary => Some(Question::ternary(attribute)),
            QuestionStrategy::TargetValue => {
                let anchor = first_observed_value(catalog, candidates, attribute)?;
                Some(Question::anchored(attribute, anchor))
            }
        }
    }
}

/// Value held by the first candidate (catalog order) that defines `attribute`
fn first_observed_value<'a>(
    catalog: &'a Catalog,
    candidates: &CandidateSet,
    attribute: &str,
) -> Option<&'a str> {
    candidates.iter().find_map(|id| catalog.value(id, attribute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterId, CharacterRecord};

    fn catalog(records: Vec<CharacterRecord>) -> Catalog {
        Catalog::load(records).unwrap()
    }

    fn asked(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_counts_absent_bucket() {
        let catalog = catalog(vec![
            CharacterRecord::new("A").with_attribute("tall", "yes"),
            CharacterRecord::new("B").with_attribute("tall", "no"),
            CharacterRecord::new("C"),
            CharacterRecord::new("D"),
        ]);
        let all = CandidateSet::all(&catalog);

        let buckets = partition(&catalog, &all, "tall");
        assert_eq!(buckets.get(&Some("yes")), Some(&1));
        assert_eq!(buckets.get(&Some("no")), Some(&1));
        assert_eq!(buckets.get(&None), Some(&2));
        assert_eq!(balance_score(&catalog, &all, "tall"), Some(1));
    }

    #[test]
    fn test_unanimous_attribute_is_not_eligible() {
        let catalog = catalog(vec![
            CharacterRecord::new("A").with_attribute("human", "yes"),
            CharacterRecord::new("B").with_attribute("human", "yes"),
        ]);
        let all = CandidateSet::all(&catalog);
        assert_eq!(balance_score(&catalog, &all, "human"), None);
        assert_eq!(
            QuestionSelector::default().select_next(&catalog, &all, &asked(&[])),
            None
        );
    }

    #[test]
    fn test_all_absent_is_not_eligible() {
        let catalog = catalog(vec![
            CharacterRecord::new("A").with_attribute("human", "yes"),
            CharacterRecord::new("B").with_attribute("human", "no"),
            CharacterRecord::new("C").with_attribute("cape", "yes"),
        ]);
        // Only A and B remain; neither defines "cape".
        let candidates = CandidateSet::from_ids([CharacterId(0), CharacterId(1)]);
        let question = QuestionSelector::default()
            .select_next(&catalog, &candidates, &asked(&[]))
            .unwrap();
        assert_eq!(question.attribute(), "human");
    }

    #[test]
    fn test_selects_most_balanced_attribute() {
        let catalog = catalog(vec![
            CharacterRecord::new("A")
                .with_attribute("fictional", "yes")
                .with_attribute("wizard", "yes"),
            CharacterRecord::new("B")
                .with_attribute("fictional", "yes")
                .with_attribute("wizard", "no"),
            CharacterRecord::new("C")
                .with_attribute("fictional", "yes")
                .with_attribute("wizard", "yes"),
            CharacterRecord::new("D")
                .with_attribute("fictional", "no")
                .with_attribute("wizard", "no"),
        ]);
        let all = CandidateSet::all(&catalog);

        // fictional splits 3/1 (score 2), wizard splits 2/2 (score 0)
        let question = QuestionSelector::default()
            .select_next(&catalog, &all, &asked(&[]))
            .unwrap();
        assert_eq!(question.attribute(), "wizard");
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let catalog = catalog(vec![
            CharacterRecord::new("A")
                .with_attribute("zebra", "yes")
                .with_attribute("apple", "yes")
                .with_attribute("mango", "yes"),
            CharacterRecord::new("B")
                .with_attribute("zebra", "no")
                .with_attribute("apple", "no")
                .with_attribute("mango", "no"),
        ]);
        let all = CandidateSet::all(&catalog);
        let selector = QuestionSelector::default();

        assert_eq!(
            selector
                .select_next(&catalog, &all, &asked(&[]))
                .unwrap()
                .attribute(),
            "apple"
        );
        assert_eq!(
            selector
                .select_next(&catalog, &all, &asked(&["apple"]))
                .unwrap()
                .attribute(),
            "mango"
        );
    }

    #[test]
    fn test_never_returns_asked_attribute() {
        let catalog = catalog(vec![
            CharacterRecord::new("A")
                .with_attribute("a", "yes")
                .with_attribute("b", "yes")
                .with_attribute("c", "no"),
            CharacterRecord::new("B")
                .with_attribute("a", "no")
                .with_attribute("b", "maybe")
                .with_attribute("c", "yes"),
            CharacterRecord::new("C")
                .with_attribute("a", "maybe")
                .with_attribute("b", "no")
                .with_attribute("c", "maybe"),
        ]);
        let all = CandidateSet::all(&catalog);
        let selector = QuestionSelector::default();

        let mut seen = asked(&[]);
        while let Some(question) = selector.select_next(&catalog, &all, &seen) {
            assert!(!seen.contains(question.attribute()));
            seen.insert(question.attribute().to_string());
        }
        assert_eq!(seen, asked(&["a", "b", "c"]));
    }

    #[test]
    fn test_target_value_anchor_is_first_observed_value() {
        let catalog = catalog(vec![
            CharacterRecord::new("A"),
            CharacterRecord::new("B").with_attribute("hair", "red"),
            CharacterRecord::new("C").with_attribute("hair", "black"),
        ]);
        let all = CandidateSet::all(&catalog);

        let question = QuestionSelector::new(QuestionStrategy::TargetValue)
            .select_next(&catalog, &all, &asked(&[]))
            .unwrap();
        assert_eq!(question.attribute(), "hair");
        assert_eq!(question.anchor(), Some("red"));
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        let catalog = catalog(vec![
            CharacterRecord::new("A").with_attribute("tall", "yes"),
            CharacterRecord::new("B").with_attribute("tall", "no"),
        ]);
        assert_eq!(
            QuestionSelector::default().select_next(&catalog, &CandidateSet::default(), &asked(&[])),
            None
        );
    }
}
