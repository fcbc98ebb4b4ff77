use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{CatalogEntry, CatalogItem, CatalogResponse, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<CatalogItem>>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all festival-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/festivals", web::get().to(list_festivals))
        .route("/festivals/match", web::post().to(find_matches))
        .route("/festivals/{id}", web::get().to(get_festival));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the loaded catalog with each festival's region
///
/// GET /api/v1/festivals
async fn list_festivals(state: web::Data<AppState>) -> impl Responder {
    let festivals: Vec<CatalogEntry> = state
        .catalog
        .iter()
        .map(|item| CatalogEntry { item, region: item.region() })
        .collect();

    HttpResponse::Ok().json(CatalogResponse {
        total: festivals.len(),
        festivals,
    })
}

/// Fetch a single festival by id
///
/// GET /api/v1/festivals/{id}
async fn get_festival(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.iter().find(|item| item.id == id) {
        Some(item) => HttpResponse::Ok().json(CatalogEntry { item, region: item.region() }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Festival not found".to_string(),
            message: format!("No festival with id {}", id),
            status_code: 404,
        }),
    }
}

/// Find matches endpoint
///
/// POST /api/v1/festivals/match
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "genres": ["electronic"],
///     "months": ["July"],
///     "budget": { "min": 0, "max": 300 },
///     "regions": ["europe"],
///     "genreImportance": 4,
///     "budgetFlexibility": "strict",
///     "dateFlexibility": "very-flexible"
///   },
///   "limit": 6
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;
    let preferences = &req.preferences;

    tracing::info!(
        "Ranking {} festivals: genres={:?}, months={}, regions={}, limit={}",
        state.catalog.len(),
        preferences.genres,
        preferences.months.len(),
        preferences.regions.len(),
        limit
    );

    let matches = state.matcher.rank(&state.catalog, preferences, limit);

    let response = FindMatchesResponse {
        total_candidates: state.catalog.len(),
        total_results: matches.len(),
        matches,
    };

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        response.total_results,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            catalog_size: 3,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
