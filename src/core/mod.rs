// Core algorithm exports
pub mod calendar;
pub mod compatibility;
pub mod matcher;
pub mod reasons;
pub mod region;
pub mod scoring;

pub use calendar::{adjacent_months, format_months, is_adjacent_to_any};
pub use compatibility::calculate_compatibility;
pub use matcher::{rank, Matcher};
pub use reasons::generate_reasons;
pub use region::classify_region;
pub use scoring::{calculate_criterion_scores, calculate_match_score, NEUTRAL_SCORE};
