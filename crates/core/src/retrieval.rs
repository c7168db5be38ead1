use crate::error::CoreError;
use regex::Regex;
use std::collections::HashSet;

/// Extracts the comparison vocabulary of a text: lowercase maximal runs of
/// word characters, three characters or longer. Shorter runs (articles,
/// connectors) are noise and dropped.
pub fn tokenize(text: &str) -> Result<HashSet<String>, CoreError> {
    let word = Regex::new(r"\b\w{3,}\b")?;
    let lowered = text.to_lowercase();

    Ok(word
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect())
}

/// Scoring seam between retrieval and ranking.
///
/// The default lexical-overlap scorer is deliberately simple; a statistical
/// or embedding-based scorer can be substituted here without touching the
/// chunker or the prompt assembler.
pub trait ScoringStrategy {
    fn score(&self, query_terms: &HashSet<String>, candidate_terms: &HashSet<String>) -> usize;
}

/// Raw cardinality of the term-set intersection. Not length-normalized, so
/// longer or term-dense candidates are favored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalOverlapScorer;

impl ScoringStrategy for LexicalOverlapScorer {
    fn score(&self, query_terms: &HashSet<String>, candidate_terms: &HashSet<String>) -> usize {
        query_terms.intersection(candidate_terms).count()
    }
}

/// Selects the `k` candidates sharing the most terms with `query`, using the
/// default [`LexicalOverlapScorer`].
pub fn select_top_k(
    query: &str,
    candidates: &[String],
    k: usize,
) -> Result<Vec<String>, CoreError> {
    select_top_k_with(&LexicalOverlapScorer, query, candidates, k)
}

/// Like [`select_top_k`] but with a caller-chosen scoring strategy.
///
/// Candidates are sorted by score descending; ties keep their input order so
/// the selection is deterministic. Returns `min(k, candidates.len())`
/// entries. An empty candidate set short-circuits before any scoring.
pub fn select_top_k_with<S: ScoringStrategy>(
    scorer: &S,
    query: &str,
    candidates: &[String],
    k: usize,
) -> Result<Vec<String>, CoreError> {
    if k == 0 {
        return Err(CoreError::InvalidConfiguration(
            "k must be positive".to_string(),
        ));
    }

    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let query_terms = tokenize(query)?;

    let mut scored = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate_terms = tokenize(candidate)?;
        scored.push((scorer.score(&query_terms, &candidate_terms), candidate));
    }

    // Vec::sort_by is stable, which keeps tied candidates in input order.
    scored.sort_by(|left, right| right.0.cmp(&left.0));

    Ok(scored
        .into_iter()
        .take(k)
        .map(|(_, candidate)| candidate.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{select_top_k, tokenize, LexicalOverlapScorer, ScoringStrategy};
    use std::collections::HashSet;

    fn terms(words: &[&str]) -> HashSet<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn tokens_are_lowercased_and_deduplicated() {
        let tokens = tokenize("Alpha ALPHA alpha").expect("tokenize should succeed");
        assert_eq!(tokens, terms(&["alpha"]));
    }

    #[test]
    fn short_tokens_are_ignored() {
        let tokens = tokenize("an is to be or ab xyz").expect("tokenize should succeed");
        assert_eq!(tokens, terms(&["xyz"]));
    }

    #[test]
    fn overlap_score_is_intersection_cardinality() {
        let scorer = LexicalOverlapScorer;
        let score = scorer.score(&terms(&["alpha", "beta"]), &terms(&["beta", "gamma"]));
        assert_eq!(score, 1);
        assert_eq!(scorer.score(&terms(&["alpha"]), &terms(&["gamma"])), 0);
    }

    #[test]
    fn returns_min_of_k_and_candidate_count() {
        let candidates = vec![
            "alpha one".to_string(),
            "alpha two".to_string(),
            "alpha three".to_string(),
        ];

        let picked = select_top_k("alpha", &candidates, 5).expect("selection should succeed");
        assert_eq!(picked.len(), 3);

        let picked = select_top_k("alpha", &candidates, 2).expect("selection should succeed");
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn empty_candidates_yield_empty_selection() {
        let picked = select_top_k("anything at all", &[], 4).expect("selection should succeed");
        assert!(picked.is_empty());
    }

    #[test]
    fn zero_k_is_rejected() {
        let candidates = vec!["alpha".to_string()];
        assert!(select_top_k("alpha", &candidates, 0).is_err());
    }

    #[test]
    fn higher_overlap_ranks_first() {
        let candidates = vec![
            "alpha mentioned alone".to_string(),
            "alpha and beta together".to_string(),
        ];

        let picked =
            select_top_k("alpha beta gamma", &candidates, 2).expect("selection should succeed");
        assert_eq!(picked[0], "alpha and beta together");
        assert_eq!(picked[1], "alpha mentioned alone");
    }

    #[test]
    fn ties_preserve_input_order() {
        let candidates = vec![
            "gamma delta alpha".to_string(),
            "zeta alpha epsilon".to_string(),
            "nothing relevant".to_string(),
        ];

        let picked = select_top_k("alpha beta", &candidates, 2).expect("selection should succeed");
        assert_eq!(
            picked,
            vec![
                "gamma delta alpha".to_string(),
                "zeta alpha epsilon".to_string()
            ]
        );
    }

    #[test]
    fn repeated_terms_count_once() {
        let candidates = vec![
            "alpha alpha alpha".to_string(),
            "alpha beta".to_string(),
        ];

        // Set semantics: the repeated candidate still scores 1, so the
        // two-term candidate outranks it.
        let picked = select_top_k("alpha beta", &candidates, 2).expect("selection should succeed");
        assert_eq!(picked[0], "alpha beta");
    }
}
