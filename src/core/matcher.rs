use crate::core::{
    compatibility::calculate_compatibility,
    reasons::generate_reasons,
    scoring::{calculate_criterion_scores, calculate_match_score},
};
use crate::models::{CatalogItem, MatchResult, PreferenceQuery, ScoringWeights};

/// Ranks a festival catalog against a preference query
///
/// # Pipeline Stages
/// 1. Per-criterion scoring
/// 2. Weighted aggregation and compatibility
/// 3. Reason generation
/// 4. Stable sort and truncation
///
/// Stateless: one `Matcher` can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single festival
    pub fn score<'a>(&self, item: &'a CatalogItem, query: &PreferenceQuery) -> MatchResult<'a> {
        let breakdown = calculate_criterion_scores(item, query);
        let (raw_score, normalized_score) = calculate_match_score(&breakdown, &self.weights);

        MatchResult {
            item,
            raw_score,
            normalized_score,
            compatibility: calculate_compatibility(&breakdown),
            reasons: generate_reasons(item, &breakdown, query),
            breakdown,
        }
    }

    /// Rank the catalog best-first and keep the top `max_results`
    ///
    /// Ties keep catalog order. Nothing is filtered out: a festival scoring 0
    /// still appears if there is room for it.
    ///
    /// # Arguments
    /// * `catalog` - Every festival to consider
    /// * `query` - The user's preferences
    /// * `max_results` - Maximum number of results to return
    pub fn rank<'a>(
        &self,
        catalog: &'a [CatalogItem],
        query: &PreferenceQuery,
        max_results: usize,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = catalog
            .iter()
            .map(|item| self.score(item, query))
            .collect();

        // sort_by is stable, which keeps ties in catalog order
        results.sort_by(|a, b| b.normalized_score.cmp(&a.normalized_score));
        results.truncate(max_results);

        tracing::debug!(
            "Ranked {} festivals, returning {}",
            catalog.len(),
            results.len()
        );

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank the catalog with the default weight table
pub fn rank<'a>(
    catalog: &'a [CatalogItem],
    query: &PreferenceQuery,
    max_results: usize,
) -> Vec<MatchResult<'a>> {
    Matcher::with_default_weights().rank(catalog, query, max_results)
}
