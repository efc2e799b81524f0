//! Query, intent and extracted-entity types
//!
//! All three are ephemeral: one per request, nothing persisted.

use serde::{Deserialize, Serialize};

use crate::college::Category;
use crate::error::{Error, Result};

/// One user query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Raw query text, non-empty after trimming
    pub text: String,
    /// Optional caller identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Query {
    /// Validate and build a query. Empty text is the one input-contract
    /// violation that is rejected rather than defaulted.
    pub fn new(text: impl Into<String>, user_id: Option<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self { text, user_id })
    }
}

/// The attribute category a query asks about
///
/// Exactly one intent wins per query; the classifier's declaration order
/// defines the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum QueryIntent {
    Location,
    Courses,
    Placement,
    Fee,
    Facilities,
    /// Hostel availability and fee
    Hostel,
    /// Monthly mess fee
    MessFee,
    /// Government/private institution type
    CollegeType,
    /// Per-college cutoff lookup ("cutoff of X for SC")
    CutoffLookup,
    /// Filter colleges with cutoff strictly above a percentile
    CutoffAbove,
    /// Filter colleges with cutoff strictly below a percentile
    CutoffBelow,
    /// No trigger keyword matched
    #[default]
    Unknown,
}

impl QueryIntent {
    /// Get intent display name
    pub fn display_name(&self) -> &'static str {
        match self {
            QueryIntent::Location => "location",
            QueryIntent::Courses => "courses",
            QueryIntent::Placement => "placement",
            QueryIntent::Fee => "fee",
            QueryIntent::Facilities => "facilities",
            QueryIntent::Hostel => "hostel",
            QueryIntent::MessFee => "mess_fee",
            QueryIntent::CollegeType => "college_type",
            QueryIntent::CutoffLookup => "cutoff_lookup",
            QueryIntent::CutoffAbove => "cutoff_above",
            QueryIntent::CutoffBelow => "cutoff_below",
            QueryIntent::Unknown => "none",
        }
    }
}

/// Entities pulled out of the raw query text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// First numeric token (thousands separators stripped)
    pub number: Option<f64>,
    /// Reservation category; OPEN when absent or unrecognized
    #[serde(default)]
    pub category: Category,
    /// First course-vocabulary hit
    pub course: Option<String>,
    /// Proper-noun place-name spans, possibly empty
    #[serde(default)]
    pub locations: Vec<String>,
    /// First dataset college name occurring in the query
    pub college: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(Query::new("   ", None), Err(Error::EmptyQuery)));
        assert!(Query::new("Where is MNIT Jaipur?", None).is_ok());
    }

    #[test]
    fn test_default_entities() {
        let entities = ExtractedEntities::default();
        assert_eq!(entities.category, Category::Open);
        assert!(entities.number.is_none());
        assert!(entities.locations.is_empty());
    }
}
