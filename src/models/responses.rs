use serde::{Deserialize, Serialize};

use crate::models::domain::{CatalogItem, MatchResult, Region};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub total_candidates: usize,
    pub total_results: usize,
}

/// Catalog entry as listed by the festivals endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry<'a> {
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    pub region: Region,
}

/// Response for the festivals listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    pub festivals: Vec<CatalogEntry<'a>>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
