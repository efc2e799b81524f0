//! College dataset record and cutoff table types

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Reservation category affecting the applicable admission cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum Category {
    /// General/open category, the default when a query names none
    #[default]
    Open,
    Sc,
    St,
    Obc,
    Ews,
    Pwd,
}

impl Category {
    /// All category codes, in the order they are scanned during extraction
    pub const ALL: [Category; 6] = [
        Category::Open,
        Category::Sc,
        Category::St,
        Category::Obc,
        Category::Ews,
        Category::Pwd,
    ];

    /// Canonical uppercase code
    pub fn code(&self) -> &'static str {
        match self {
            Category::Open => "OPEN",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Obc => "OBC",
            Category::Ews => "EWS",
            Category::Pwd => "PWD",
        }
    }

    /// Parse a category code, case-insensitively
    pub fn parse(token: &str) -> Option<Category> {
        let upper = token.trim().to_ascii_uppercase();
        Category::ALL.iter().copied().find(|c| c.code() == upper)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-category admission cutoff percentiles for one college
pub type CutoffTable = HashMap<Category, f64>;

/// One institution in the dataset
///
/// Loaded once at startup and read-only afterwards. `name` is the primary
/// matching key and must be non-empty; every other field is optional and
/// degrades to a documented fallback at composition time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeRecord {
    /// Full institution name (unique key)
    pub name: String,
    /// Common abbreviation, e.g. "MNIT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// City/town
    #[serde(default)]
    pub location: String,
    /// Institution type, e.g. government/private
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub college_type: Option<String>,
    /// Affiliating university/body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    /// Year of establishment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,
    /// Offered courses, in dataset order
    #[serde(default)]
    pub courses: Vec<String>,
    /// Free-text facilities description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    /// Hostel availability
    #[serde(default)]
    pub hostel_available: bool,
    /// Annual hostel fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel_fee: Option<f64>,
    /// Monthly mess fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mess_fee: Option<f64>,
    /// Free-text placement record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_records: Option<String>,
    /// Average package (numeric or free text in source data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_package: Option<String>,
    /// Highest package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_package: Option<String>,
    /// Fee structure (numeric or free text in source data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_structure: Option<String>,
    /// Category -> cutoff percentile; malformed data degrades to `None`
    #[serde(default, deserialize_with = "de_cutoff")]
    pub cutoff: Option<CutoffTable>,
    /// Free-text scholarship information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholarships: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl CollegeRecord {
    /// Cutoff percentile for a category, if the record has one
    pub fn cutoff_for(&self, category: Category) -> Option<f64> {
        self.cutoff.as_ref().and_then(|table| table.get(&category).copied())
    }
}

/// Tolerant cutoff deserializer.
///
/// A record whose cutoff field is missing, not an object, or holds
/// unrecognized category keys or non-numeric values is treated as
/// "cutoff absent" rather than failing the dataset load. Only the
/// well-formed entries of a partially valid table are kept.
fn de_cutoff<'de, D>(deserializer: D) -> Result<Option<CutoffTable>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let map = match value {
        Some(serde_json::Value::Object(map)) => map,
        Some(other) => {
            tracing::warn!("Ignoring malformed cutoff value: {}", other);
            return Ok(None);
        }
        None => return Ok(None),
    };

    let mut table = CutoffTable::new();
    for (key, entry) in map {
        match (Category::parse(&key), entry.as_f64()) {
            (Some(category), Some(percentile)) => {
                table.insert(category, percentile);
            }
            _ => {
                tracing::warn!("Ignoring malformed cutoff entry: {}={}", key, entry);
            }
        }
    }

    if table.is_empty() {
        Ok(None)
    } else {
        Ok(Some(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("obc"), Some(Category::Obc));
        assert_eq!(Category::parse("OPEN"), Some(Category::Open));
        assert_eq!(Category::parse("general"), None);
    }

    #[test]
    fn test_record_minimal_fields() {
        let record: CollegeRecord = serde_json::from_str(r#"{"name": "MNIT Jaipur"}"#).unwrap();

        assert_eq!(record.name, "MNIT Jaipur");
        assert!(record.courses.is_empty());
        assert!(record.cutoff.is_none());
        assert!(!record.hostel_available);
    }

    #[test]
    fn test_cutoff_parses_known_categories() {
        let record: CollegeRecord = serde_json::from_str(
            r#"{"name": "IIT Jodhpur", "cutoff": {"OPEN": 97.5, "sc": 88.0}}"#,
        )
        .unwrap();

        assert_eq!(record.cutoff_for(Category::Open), Some(97.5));
        assert_eq!(record.cutoff_for(Category::Sc), Some(88.0));
        assert_eq!(record.cutoff_for(Category::Ews), None);
    }

    #[test]
    fn test_malformed_cutoff_is_absent_not_fatal() {
        let record: CollegeRecord = serde_json::from_str(
            r#"{"name": "GECA Ajmer", "cutoff": "not a table"}"#,
        )
        .unwrap();
        assert!(record.cutoff.is_none());

        // Partially valid table keeps the good entries only
        let record: CollegeRecord = serde_json::from_str(
            r#"{"name": "GECA Ajmer", "cutoff": {"OPEN": 81.0, "XYZ": 50.0, "SC": "bad"}}"#,
        )
        .unwrap();
        let table = record.cutoff.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[&Category::Open], 81.0);
    }
}
