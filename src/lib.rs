//! Festival Match - preference-based festival ranking
//!
//! This library scores a fixed festival catalog against a user's preference
//! query across six criteria (genre, budget, dates, region, crowd size and
//! amenities) and returns the best matches with a score breakdown and
//! human-readable reasons.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify_region, rank, Matcher};
pub use models::{CatalogItem, PreferenceQuery, MatchResult, ScoringWeights, FindMatchesRequest, FindMatchesResponse};
