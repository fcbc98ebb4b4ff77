use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::models::CatalogItem;

/// Errors that can occur while loading the festival catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid festival {id}: {reason}")]
    InvalidItem { id: String, reason: String },

    #[error("Duplicate festival id: {0}")]
    DuplicateId(String),
}

/// Load and validate the festival catalog from a JSON file
///
/// The file holds a JSON array of festivals. The ranker trusts whatever this
/// returns, so every structural invariant is checked here.
pub async fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>, CatalogError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

    let items = parse_catalog(&raw)?;
    tracing::info!("Loaded {} festivals from {}", items.len(), path.display());

    Ok(items)
}

/// Parse and validate a catalog held in memory
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    validate_catalog(&items)?;
    Ok(items)
}

/// Check the invariants the ranker relies on
pub fn validate_catalog(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::with_capacity(items.len());

    for item in items {
        validate_item(item)?;

        if !seen_ids.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }

    Ok(())
}

fn validate_item(item: &CatalogItem) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidItem {
        id: item.id.clone(),
        reason: reason.to_string(),
    };

    if item.id.trim().is_empty() {
        return Err(invalid("id is empty"));
    }
    if item.months.is_empty() {
        return Err(invalid("months must not be empty"));
    }
    if item.genres.is_empty() {
        return Err(invalid("genres must not be empty"));
    }
    if !item.cost.min.is_finite() || !item.cost.max.is_finite() || item.cost.min < 0.0 {
        return Err(invalid("cost must be finite and non-negative"));
    }
    if item.cost.min > item.cost.max {
        return Err(invalid("cost.min exceeds cost.max"));
    }

    Ok(())
}
