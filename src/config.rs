use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String { "data/festivals.json".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl MatchingSettings {
    pub fn default_limit(&self) -> u16 {
        self.default_limit.unwrap_or(6)
    }

    pub fn max_limit(&self) -> u16 {
        self.max_limit.unwrap_or(50)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_genre_weight")]
    pub genre: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_dates_weight")]
    pub dates: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_vibe_weight")]
    pub vibe: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            genre: default_genre_weight(),
            budget: default_budget_weight(),
            dates: default_dates_weight(),
            location: default_location_weight(),
            vibe: default_vibe_weight(),
            amenities: default_amenities_weight(),
        }
    }
}

fn default_genre_weight() -> f64 { 30.0 }
fn default_budget_weight() -> f64 { 25.0 }
fn default_dates_weight() -> f64 { 20.0 }
fn default_location_weight() -> f64 { 10.0 }
fn default_vibe_weight() -> f64 { 8.0 }
fn default_amenities_weight() -> f64 { 7.0 }

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            genre: config.genre,
            budget: config.budget,
            dates: config.dates,
            location: config.location,
            vibe: config.vibe,
            amenities: config.amenities,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FESTIVAL_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FESTIVAL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FESTIVAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }
}

/// Apply well-known unprefixed environment variables
///
/// `CATALOG_PATH` points the service at a different catalog file and
/// `LOG_LEVEL` / `LOG_FORMAT` override the logging section.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.genre, 30.0);
        assert_eq!(weights.budget, 25.0);
        assert_eq!(weights.dates, 20.0);
        assert_eq!(weights.location, 10.0);
        assert_eq!(weights.vibe, 8.0);
        assert_eq!(weights.amenities, 7.0);
    }

    #[test]
    fn test_weights_match_scoring_defaults() {
        assert_eq!(ScoringWeights::from(WeightsConfig::default()), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_matching_limits() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_limit(), 6);
        assert_eq!(matching.max_limit(), 50);
    }

    #[test]
    fn test_partial_weights_fall_back() {
        let settings: Settings = Config::builder()
            .set_override("scoring.weights.genre", 50.0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.scoring.weights.genre, 50.0);
        assert_eq!(settings.scoring.weights.budget, 25.0);
        assert_eq!(settings.catalog.path, "data/festivals.json");
    }
}
