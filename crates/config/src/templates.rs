//! Response template configuration
//!
//! Fixed natural-language templates with named placeholders, plus the
//! literal fallback phrases substituted when a record field is absent.
//! The glyph prefixes on labeled lines are presentation detail kept
//! configurable here rather than hard-coded.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// All composer-facing text configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTemplates {
    #[serde(default)]
    pub labels: ResponseLabels,
    #[serde(default)]
    pub fallbacks: FallbackText,
    /// Header above a multi-college result list; `{count}` placeholder
    #[serde(default = "default_multiple_header")]
    pub multiple_matches_header: String,
    /// Literal no-match message; `{query}` placeholder
    #[serde(default = "default_no_match")]
    pub no_match: String,
    /// Empty cutoff-filter result; `{direction}` and `{percentile}`
    #[serde(default = "default_no_cutoff_matches")]
    pub no_cutoff_matches: String,
    /// Cutoff-filter result header; `{direction}` and `{percentile}`
    #[serde(default = "default_cutoff_header")]
    pub cutoff_header: String,
    /// Asked for a cutoff range without giving a number
    #[serde(default = "default_cutoff_prompt")]
    pub cutoff_prompt: String,
    /// Last-resort reply when composition hits an unexpected state
    #[serde(default = "default_generic_failure")]
    pub generic_failure: String,
}

fn default_multiple_header() -> String {
    "Found {count} matching colleges:".to_string()
}

fn default_no_match() -> String {
    "Sorry, no matching colleges found for '{query}'. Please try a different search query."
        .to_string()
}

fn default_no_cutoff_matches() -> String {
    "No colleges found with a cutoff {direction} {percentile} percentile.".to_string()
}

fn default_cutoff_header() -> String {
    "Colleges with cutoff {direction} {percentile}%:".to_string()
}

fn default_cutoff_prompt() -> String {
    "Please provide a specific percentile for the cutoff.".to_string()
}

fn default_generic_failure() -> String {
    "Sorry, I could not put together an answer for that. Please try rephrasing your query."
        .to_string()
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            labels: ResponseLabels::default(),
            fallbacks: FallbackText::default(),
            multiple_matches_header: default_multiple_header(),
            no_match: default_no_match(),
            no_cutoff_matches: default_no_cutoff_matches(),
            cutoff_header: default_cutoff_header(),
            cutoff_prompt: default_cutoff_prompt(),
            generic_failure: default_generic_failure(),
        }
    }
}

impl ResponseTemplates {
    /// Load from a YAML or JSON file; absent fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
        }
    }
}

/// Glyph/label prefixes for labeled response lines (localizable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseLabels {
    #[serde(default = "default_name_label")]
    pub name: String,
    #[serde(default = "default_location_label")]
    pub location: String,
    #[serde(default = "default_courses_label")]
    pub courses: String,
    #[serde(default = "default_facilities_label")]
    pub facilities: String,
    #[serde(default = "default_placement_label")]
    pub placement: String,
    #[serde(default = "default_package_label")]
    pub package: String,
    #[serde(default = "default_fee_label")]
    pub fee: String,
    #[serde(default = "default_website_label")]
    pub website: String,
}

fn default_name_label() -> String {
    "📍".to_string()
}

fn default_location_label() -> String {
    "📍 Location:".to_string()
}

fn default_courses_label() -> String {
    "🎓 Courses Offered:".to_string()
}

fn default_facilities_label() -> String {
    "🏫 Facilities:".to_string()
}

fn default_placement_label() -> String {
    "💼 Placement Records:".to_string()
}

fn default_package_label() -> String {
    "📊 Average Package:".to_string()
}

fn default_fee_label() -> String {
    "💰 Fee Structure:".to_string()
}

fn default_website_label() -> String {
    "🌐 Website:".to_string()
}

impl Default for ResponseLabels {
    fn default() -> Self {
        Self {
            name: default_name_label(),
            location: default_location_label(),
            courses: default_courses_label(),
            facilities: default_facilities_label(),
            placement: default_placement_label(),
            package: default_package_label(),
            fee: default_fee_label(),
            website: default_website_label(),
        }
    }
}

/// Literal fallback phrases for absent record fields.
///
/// Composition never fails on missing data; it substitutes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackText {
    #[serde(default = "default_location_fallback")]
    pub location: String,
    #[serde(default = "default_courses_fallback")]
    pub courses: String,
    #[serde(default = "default_average_package")]
    pub average_package: String,
    #[serde(default = "default_highest_package")]
    pub highest_package: String,
    #[serde(default = "default_fee_structure")]
    pub fee_structure: String,
    #[serde(default = "default_scholarships")]
    pub scholarships: String,
    #[serde(default = "default_facilities_fallback")]
    pub facilities: String,
    /// Generic "field missing" phrase for labeled lines
    #[serde(default = "default_not_available")]
    pub not_available: String,
}

fn default_location_fallback() -> String {
    "an unspecified location".to_string()
}

fn default_courses_fallback() -> String {
    "various disciplines".to_string()
}

fn default_average_package() -> String {
    "competitive packages".to_string()
}

fn default_highest_package() -> String {
    "impressive top packages".to_string()
}

fn default_fee_structure() -> String {
    "reasonable fees".to_string()
}

fn default_scholarships() -> String {
    "multiple scholarship options".to_string()
}

fn default_facilities_fallback() -> String {
    "modern infrastructure".to_string()
}

fn default_not_available() -> String {
    "Not available".to_string()
}

impl Default for FallbackText {
    fn default() -> Self {
        Self {
            location: default_location_fallback(),
            courses: default_courses_fallback(),
            average_package: default_average_package(),
            highest_package: default_highest_package(),
            fee_structure: default_fee_structure(),
            scholarships: default_scholarships(),
            facilities: default_facilities_fallback(),
            not_available: default_not_available(),
        }
    }
}
