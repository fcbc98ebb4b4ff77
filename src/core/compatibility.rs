use crate::core::scoring::NEUTRAL_SCORE;
use crate::models::CriterionScores;

/// Calculate compatibility (0-100): the mean of the criteria the user had an opinion on
///
/// Criteria sitting exactly at the neutral score are skipped. With nothing
/// left the compatibility is 0.
pub fn calculate_compatibility(scores: &CriterionScores) -> u32 {
    let opinionated: Vec<f64> = scores
        .values()
        .into_iter()
        .filter(|&score| score != NEUTRAL_SCORE)
        .collect();

    if opinionated.is_empty() {
        return 0;
    }

    let mean = opinionated.iter().sum::<f64>() / opinionated.len() as f64;
    (mean * 100.0).round().max(0.0) as u32
}
