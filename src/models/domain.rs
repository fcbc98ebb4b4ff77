use chrono::Month;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::core::region::classify_region;

/// Festival record as supplied by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub months: Vec<Month>,
    pub genres: Vec<String>,
    pub cost: CostRange,
    #[serde(rename = "audienceSize")]
    pub audience_size: AudienceSize,
    #[serde(rename = "durationDays")]
    pub duration_days: u8,
    #[serde(rename = "familyFriendly", default)]
    pub family_friendly: bool,
    #[serde(default)]
    pub camping: bool,
    #[serde(default)]
    pub glamping: bool,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub weather: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "ticketUrl", default)]
    pub ticket_url: Option<String>,
}

impl CatalogItem {
    /// Region bucket for the festival's country
    pub fn region(&self) -> Region {
        classify_region(&self.country)
    }
}

/// Ticket price range in a single currency unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceSize {
    Intimate,
    Medium,
    Massive,
}

impl AudienceSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceSize::Intimate => "intimate",
            AudienceSize::Medium => "medium",
            AudienceSize::Massive => "massive",
        }
    }
}

impl fmt::Display for AudienceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse geographic bucket a festival's country falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Europe,
    Usa,
    Asia,
    Oceania,
    SouthAmerica,
    Other,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::Usa => "USA",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tolerance tier applied around an exact budget or date match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flexibility {
    Strict,
    #[default]
    Flexible,
    VeryFlexible,
}

impl Flexibility {
    /// Share of the festival's top price granted as slack around the budget
    #[inline]
    pub fn budget_buffer_ratio(&self) -> f64 {
        match self {
            Flexibility::Strict => 0.10,
            Flexibility::Flexible => 0.20,
            Flexibility::VeryFlexible => 0.30,
        }
    }

    /// Date score for a festival running one month off an acceptable month
    #[inline]
    pub fn adjacent_month_score(&self) -> f64 {
        match self {
            Flexibility::Strict => 0.3,
            Flexibility::Flexible => 0.6,
            Flexibility::VeryFlexible => 0.8,
        }
    }
}

/// Desired festival length. Accepted from the quiz but not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPreference {
    Day,
    Weekend,
    Week,
}

/// A preference that is either a concrete value or "any"
///
/// On the wire this is the bare value (`true`, `"massive"`) or the string `"any"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference<T> {
    Any,
    Only(T),
}

impl<T> Preference<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Preference::Any => None,
            Preference::Only(value) => Some(value),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Preference::Any)
    }
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Preference::Any
    }
}

/// Either a concrete wire value or a bare sentinel string
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueOrSentinel<T> {
    Value(T),
    Sentinel(String),
}

fn deserialize_with_sentinel<'de, D, T>(deserializer: D, sentinel: &str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match ValueOrSentinel::<T>::deserialize(deserializer)? {
        ValueOrSentinel::Value(value) => Ok(Some(value)),
        ValueOrSentinel::Sentinel(text) if text == sentinel => Ok(None),
        ValueOrSentinel::Sentinel(text) => Err(de::Error::custom(format!(
            "unexpected value \"{}\", expected a known option or \"{}\"",
            text, sentinel
        ))),
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Preference<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(deserialize_with_sentinel(deserializer, "any")?
            .map_or(Preference::Any, Preference::Only))
    }
}

impl<T: Serialize> Serialize for Preference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Preference::Any => serializer.serialize_str("any"),
            Preference::Only(value) => value.serialize(serializer),
        }
    }
}

/// One entry of the acceptable-regions list: a region or the "anywhere" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChoice {
    Anywhere,
    Region(Region),
}

impl RegionChoice {
    #[inline]
    pub fn accepts(&self, region: Region) -> bool {
        match self {
            RegionChoice::Anywhere => true,
            RegionChoice::Region(wanted) => *wanted == region,
        }
    }
}

impl<'de> Deserialize<'de> for RegionChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(deserialize_with_sentinel(deserializer, "anywhere")?
            .map_or(RegionChoice::Anywhere, RegionChoice::Region))
    }
}

impl Serialize for RegionChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RegionChoice::Anywhere => serializer.serialize_str("anywhere"),
            RegionChoice::Region(region) => region.serialize(serializer),
        }
    }
}

/// Budget bounds; either side may be left open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_bounds"))]
pub struct BudgetRange {
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub min: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

fn validate_budget_bounds(budget: &BudgetRange) -> Result<(), ValidationError> {
    match (budget.min, budget.max) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("budget_min_exceeds_max")),
        _ => Ok(()),
    }
}

/// What the user is looking for. Every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PreferenceQuery {
    pub genres: Vec<String>,
    pub months: Vec<Month>,
    #[validate(nested)]
    pub budget: BudgetRange,
    #[serde(rename = "audienceSize")]
    pub audience_size: Preference<AudienceSize>,
    pub duration: Option<DurationPreference>,
    #[serde(rename = "familyFriendly")]
    pub family_friendly: Preference<bool>,
    pub camping: Preference<bool>,
    pub regions: Vec<RegionChoice>,
    /// 1-5 dial; 3 leaves genre overlap unscaled
    #[serde(rename = "genreImportance")]
    #[validate(range(min = 1, max = 5))]
    pub genre_importance: u8,
    #[serde(rename = "budgetFlexibility")]
    pub budget_flexibility: Flexibility,
    #[serde(rename = "dateFlexibility")]
    pub date_flexibility: Flexibility,
}

impl Default for PreferenceQuery {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            months: Vec::new(),
            budget: BudgetRange::default(),
            audience_size: Preference::Any,
            duration: None,
            family_friendly: Preference::Any,
            camping: Preference::Any,
            regions: Vec::new(),
            genre_importance: 3,
            budget_flexibility: Flexibility::default(),
            date_flexibility: Flexibility::default(),
        }
    }
}

/// Per-criterion scores for one festival. Each lies in [0, 1] except genre,
/// which is scaled by importance and may exceed 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub genre: f64,
    pub budget: f64,
    pub dates: f64,
    pub location: f64,
    pub vibe: f64,
    pub amenities: f64,
}

impl CriterionScores {
    pub fn values(&self) -> [f64; 6] {
        [
            self.genre,
            self.budget,
            self.dates,
            self.location,
            self.vibe,
            self.amenities,
        ]
    }
}

/// Scored festival
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub item: &'a CatalogItem,
    #[serde(rename = "rawScore")]
    pub raw_score: f64,
    #[serde(rename = "normalizedScore")]
    pub normalized_score: u32,
    pub compatibility: u32,
    pub reasons: Vec<String>,
    pub breakdown: CriterionScores,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub genre: f64,
    pub budget: f64,
    pub dates: f64,
    pub location: f64,
    pub vibe: f64,
    pub amenities: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.genre + self.budget + self.dates + self.location + self.vibe + self.amenities
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            genre: 30.0,
            budget: 25.0,
            dates: 20.0,
            location: 10.0,
            vibe: 8.0,
            amenities: 7.0,
        }
    }
}
