// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AudienceSize, BudgetRange, CatalogItem, CostRange, CriterionScores, DurationPreference,
    Flexibility, MatchResult, Preference, PreferenceQuery, Region, RegionChoice, ScoringWeights,
};
pub use requests::FindMatchesRequest;
pub use responses::{CatalogEntry, CatalogResponse, ErrorResponse, FindMatchesResponse, HealthResponse};
