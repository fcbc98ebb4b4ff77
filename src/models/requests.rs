use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::PreferenceQuery;

/// Request to rank the catalog against a set of preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(default)]
    #[validate(nested)]
    pub preferences: PreferenceQuery,
    /// Falls back to the configured default, capped at the configured maximum
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}
