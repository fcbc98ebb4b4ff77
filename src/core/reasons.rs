use crate::core::calendar::format_months;
use crate::models::{CatalogItem, CriterionScores, Preference, PreferenceQuery};

const STRONG_GENRE_THRESHOLD: f64 = 0.7;
const EXCELLENT_BUDGET_THRESHOLD: f64 = 0.8;
const WITHIN_BUDGET_THRESHOLD: f64 = 0.5;
const PERFECT_TIMING_THRESHOLD: f64 = 0.7;
const ATMOSPHERE_THRESHOLD: f64 = 0.7;
const AMENITIES_THRESHOLD: f64 = 0.7;

/// Build the justification strings for a scored festival
///
/// Checks run in a fixed order (genre, budget, dates, location, vibe,
/// amenities) and each adds at most one line.
pub fn generate_reasons(
    item: &CatalogItem,
    scores: &CriterionScores,
    query: &PreferenceQuery,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.genre > STRONG_GENRE_THRESHOLD {
        reasons.push(format!("strong genre match: {}", item.genres.join(", ")));
    }

    if scores.budget > EXCELLENT_BUDGET_THRESHOLD {
        reasons.push(format!(
            "excellent budget fit: ${:.0}-${:.0}",
            item.cost.min, item.cost.max
        ));
    } else if scores.budget > WITHIN_BUDGET_THRESHOLD {
        reasons.push("within your budget range".to_string());
    }

    if scores.dates > PERFECT_TIMING_THRESHOLD {
        reasons.push(format!("perfect timing: {}", format_months(&item.months)));
    }

    if scores.location > 0.0 {
        reasons.push(format!("located in your preferred region: {}", item.region()));
    }

    if scores.vibe > ATMOSPHERE_THRESHOLD {
        reasons.push(format!(
            "matches your preferred atmosphere: {}",
            item.audience_size
        ));
    }

    if scores.amenities > AMENITIES_THRESHOLD {
        let offered = satisfied_amenities(item, query);
        reasons.push(format!("offers desired amenities: {}", offered.join(", ")));
    }

    reasons
}

/// Amenity preferences the festival satisfies
///
/// Past the threshold every stated preference is met, so this is never empty
/// there. A met "no" preference is listed as what the festival is instead.
fn satisfied_amenities(item: &CatalogItem, query: &PreferenceQuery) -> Vec<&'static str> {
    let mut offered = Vec::new();

    match query.camping {
        Preference::Only(true) if item.camping => {
            offered.push("camping");
            if item.glamping {
                offered.push("glamping");
            }
        }
        Preference::Only(false) if !item.camping => offered.push("no camping"),
        _ => {}
    }

    match query.family_friendly {
        Preference::Only(true) if item.family_friendly => offered.push("family-friendly"),
        Preference::Only(false) if !item.family_friendly => offered.push("not family-oriented"),
        _ => {}
    }

    offered
}
