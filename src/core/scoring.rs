use crate::core::calendar::is_adjacent_to_any;
use crate::models::{CatalogItem, CriterionScores, Preference, PreferenceQuery, ScoringWeights};

/// Score for a criterion the user expressed no preference on
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Genre importance that leaves the overlap ratio unscaled
const IMPORTANCE_MIDPOINT: f64 = 3.0;

/// Ideal ticket price as a share of the user's budget ceiling
const IDEAL_PRICE_RATIO: f64 = 0.8;

/// Lowest score a festival inside the (buffered) budget can receive
const MIN_IN_BUDGET_SCORE: f64 = 0.3;

/// Score every criterion for one festival
pub fn calculate_criterion_scores(item: &CatalogItem, query: &PreferenceQuery) -> CriterionScores {
    CriterionScores {
        genre: genre_score(item, query),
        budget: budget_score(item, query),
        dates: date_score(item, query),
        location: location_score(item, query),
        vibe: vibe_score(item, query),
        amenities: amenities_score(item, query),
    }
}

/// Combine criterion scores into a raw weighted score and a 0-100 normalized score
///
/// score = (
///     genre * 30 +
///     budget * 25 +
///     dates * 20 +
///     location * 10 +
///     vibe * 8 +
///     amenities * 7
/// ) / 100 * 100
///
/// Linear: no criterion can veto another. The normalized score is not capped,
/// so a genre score above 1 can push it past 100.
pub fn calculate_match_score(scores: &CriterionScores, weights: &ScoringWeights) -> (f64, u32) {
    let raw_score = scores.genre * weights.genre
        + scores.budget * weights.budget
        + scores.dates * weights.dates
        + scores.location * weights.location
        + scores.vibe * weights.vibe
        + scores.amenities * weights.amenities;

    let total_weight = weights.total();
    let normalized = if total_weight > 0.0 {
        (raw_score / total_weight * 100.0).round().max(0.0) as u32
    } else {
        0
    };

    (raw_score, normalized)
}

/// Distinct genres the festival shares with the query, in festival order
pub fn shared_genres<'a>(item: &'a CatalogItem, query: &PreferenceQuery) -> Vec<&'a str> {
    let mut shared: Vec<&str> = Vec::new();
    for genre in &item.genres {
        if query.genres.contains(genre) && !shared.contains(&genre.as_str()) {
            shared.push(genre);
        }
    }
    shared
}

/// Genre score, scaled by the importance dial
///
/// Not clamped: importance above 3 with high overlap yields values above 1.
#[inline]
pub fn genre_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    if query.genres.is_empty() {
        return NEUTRAL_SCORE;
    }

    let overlap = shared_genres(item, query).len() as f64;
    let base = overlap / query.genres.len().max(1) as f64;

    base * (f64::from(query.genre_importance) / IMPORTANCE_MIDPOINT)
}

/// Budget score (0-1)
///
/// Out of the buffered range scores exactly 0. Inside it, festivals whose
/// entry price sits near 80% of the budget ceiling score highest.
#[inline]
pub fn budget_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    let budget = &query.budget;
    if budget.is_open() {
        return NEUTRAL_SCORE;
    }

    let buffer = item.cost.max * query.budget_flexibility.budget_buffer_ratio();
    let floor = budget.min.unwrap_or(0.0);
    let ceiling = budget.max.unwrap_or(f64::INFINITY);

    let within_budget = floor <= item.cost.max + buffer && ceiling >= item.cost.min - buffer;
    if !within_budget {
        return 0.0;
    }

    // An open ceiling puts the ideal price at infinity, so every price is
    // maximally far from it.
    let Some(max) = budget.max else {
        return MIN_IN_BUDGET_SCORE;
    };

    let ideal_price = max * IDEAL_PRICE_RATIO;
    if ideal_price <= 0.0 {
        return if item.cost.min <= 0.0 { 1.0 } else { MIN_IN_BUDGET_SCORE };
    }

    let deviation = (item.cost.min - ideal_price).abs() / ideal_price;
    (1.0 - deviation).clamp(MIN_IN_BUDGET_SCORE, 1.0)
}

/// Date score (0-1): the best fit across all months the festival runs in
#[inline]
pub fn date_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    if query.months.is_empty() {
        return NEUTRAL_SCORE;
    }

    let adjacent_score = query.date_flexibility.adjacent_month_score();

    item.months
        .iter()
        .map(|&month| {
            if query.months.contains(&month) {
                1.0
            } else if is_adjacent_to_any(month, &query.months) {
                adjacent_score
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

/// Location score: 1 if the festival's region is acceptable, else 0
///
/// There is no neutral state; an empty region list accepts nothing.
#[inline]
pub fn location_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    let region = item.region();
    if query.regions.iter().any(|choice| choice.accepts(region)) {
        1.0
    } else {
        0.0
    }
}

/// Audience-size score: exact match against the preferred crowd size
#[inline]
pub fn vibe_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    match query.audience_size {
        Preference::Any => NEUTRAL_SCORE,
        Preference::Only(size) if size == item.audience_size => 1.0,
        Preference::Only(_) => 0.0,
    }
}

/// Amenities score: share of the stated camping / family preferences the festival meets
#[inline]
pub fn amenities_score(item: &CatalogItem, query: &PreferenceQuery) -> f64 {
    let checks = [
        query.camping.as_option().map(|&wanted| wanted == item.camping),
        query
            .family_friendly
            .as_option()
            .map(|&wanted| wanted == item.family_friendly),
    ];

    let applicable = checks.iter().flatten().count();
    if applicable == 0 {
        return NEUTRAL_SCORE;
    }

    let matched = checks.iter().flatten().filter(|&&met| met).count();
    matched as f64 / applicable as f64
}
