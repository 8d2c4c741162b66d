//! Answer filtering.
//!
//! Narrows a candidate set by a player's answer. The rule follows the
//! strategy the question was formulated under:
//!
//! | Strategy | `yes` | `no` | `maybe` |
//! |----------|-------|------|---------|
//! | Ternary | value == "yes" | value == "no" | value == "maybe" |
//! | TargetValue | value == anchor | value != anchor (absent included) | unchanged |
//!
//! Under the ternary strategy characters lacking the attribute never match.
//! Under the target-value strategy `maybe` carries no information, so
//! repeated `maybe` answers can stall a game; that is accepted behavior.
//!
//! Filtering is idempotent: applying the same answer twice equals applying
//! it once.

use super::value_objects::{AnswerToken, Question};
use crate::catalog::{CandidateSet, Catalog};

/// Narrow `candidates` by `token` as an answer to `question`
pub fn apply_answer(
    catalog: &Catalog,
    candidates: &CandidateSet,
    question: &Question,
    token: AnswerToken,
) -> CandidateSet {
    let attribute = question.attribute();

    match question.anchor() {
        None => candidates.retain_where(|id| catalog.value(id, attribute) == Some(token.as_str())),
        Some(anchor) => match token {
            AnswerToken::Yes => {
                candidates.retain_where(|id| catalog.value(id, attribute) == Some(anchor))
            }
            AnswerToken::No => {
                candidates.retain_where(|id| catalog.value(id, attribute) != Some(anchor))
            }
            AnswerToken::Maybe => candidates.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterId, CharacterRecord};

    fn ids(set: &CandidateSet) -> Vec<usize> {
        set.iter().map(|id| id.0).collect()
    }

    /// yes / no / maybe / absent / other
    fn mixed_catalog() -> Catalog {
        Catalog::load(vec![
            CharacterRecord::new("A").with_attribute("tall", "yes"),
            CharacterRecord::new("B").with_attribute("tall", "no"),
            CharacterRecord::new("C").with_attribute("tall", "maybe"),
            CharacterRecord::new("D"),
            CharacterRecord::new("E").with_attribute("tall", "sometimes"),
            CharacterRecord::new("F").with_attribute("tall", "yes"),
        ])
        .unwrap()
    }

    #[test]
    fn test_ternary_exact_match() {
        let catalog = mixed_catalog();
        let all = CandidateSet::all(&catalog);
        let q = Question::ternary("tall");

        assert_eq!(ids(&apply_answer(&catalog, &all, &q, AnswerToken::Yes)), vec![0, 5]);
        assert_eq!(ids(&apply_answer(&catalog, &all, &q, AnswerToken::No)), vec![1]);
        assert_eq!(ids(&apply_answer(&catalog, &all, &q, AnswerToken::Maybe)), vec![2]);
    }

    #[test]
    fn test_target_value_yes_and_no_are_complements() {
        let catalog = mixed_catalog();
        let all = CandidateSet::all(&catalog);
        let q = Question::anchored("tall", "yes");

        let yes = apply_answer(&catalog, &all, &q, AnswerToken::Yes);
        let no = apply_answer(&catalog, &all, &q, AnswerToken::No);

        assert_eq!(ids(&yes), vec![0, 5]);
        // absent (D) and unrelated values (C, E) all land on the "no" side
        assert_eq!(ids(&no), vec![1, 2, 3, 4]);
        assert_eq!(yes.len() + no.len(), all.len());
    }

    #[test]
    fn test_target_value_maybe_is_no_op() {
        let catalog = mixed_catalog();
        let subset = CandidateSet::from_ids([CharacterId(1), CharacterId(3)]);
        let q = Question::anchored("tall", "yes");

        assert_eq!(apply_answer(&catalog, &subset, &q, AnswerToken::Maybe), subset);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = mixed_catalog();
        let all = CandidateSet::all(&catalog);
        let questions = [Question::ternary("tall"), Question::anchored("tall", "no")];

        for q in &questions {
            for token in AnswerToken::ALL {
                let once = apply_answer(&catalog, &all, q, token);
                let twice = apply_answer(&catalog, &once, q, token);
                assert_eq!(once, twice, "{:?} / {}", q, token);
            }
        }
    }

    #[test]
    fn test_ternary_partition_law() {
        // Every candidate defines the attribute with a ternary value.
        let catalog = Catalog::load(vec![
            CharacterRecord::new("A").with_attribute("tall", "yes"),
            CharacterRecord::new("B").with_attribute("tall", "no"),
            CharacterRecord::new("C").with_attribute("tall", "maybe"),
            CharacterRecord::new("D").with_attribute("tall", "no"),
        ])
        .unwrap();
        let all = CandidateSet::all(&catalog);
        let q = Question::ternary("tall");

        let parts: Vec<CandidateSet> = AnswerToken::ALL
            .iter()
            .map(|t| apply_answer(&catalog, &all, &q, *t))
            .collect();

        let union = CandidateSet::from_ids(parts.iter().flat_map(|p| p.iter()));
        assert_eq!(union, all);
        assert_eq!(parts.iter().map(CandidateSet::len).sum::<usize>(), all.len());
    }

    #[test]
    fn test_ternary_partition_law_with_absent_bucket() {
        // Characters lacking the attribute form a fourth part that no token selects.
        let catalog = mixed_catalog();
        let all = CandidateSet::all(&catalog);
        let q = Question::ternary("tall");

        let answered: usize = AnswerToken::ALL
            .iter()
            .map(|t| apply_answer(&catalog, &all, &q, *t).len())
            .sum();
        let unmatched = all.retain_where(|id| {
            !matches!(catalog.value(id, "tall"), Some("yes" | "no" | "maybe"))
        });

        assert_eq!(ids(&unmatched), vec![3, 4]);
        assert_eq!(answered + unmatched.len(), all.len());
    }

    #[test]
    fn test_result_is_subset_of_input() {
        let catalog = mixed_catalog();
        let subset = CandidateSet::from_ids([CharacterId(0), CharacterId(1), CharacterId(2)]);
        let q = Question::anchored("tall", "no");

        for token in AnswerToken::ALL {
            assert!(apply_answer(&catalog, &subset, &q, token).is_subset_of(&subset));
        }
    }
}
