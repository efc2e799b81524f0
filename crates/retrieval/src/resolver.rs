//! College resolution cascade
//!
//! Tries matching strategies in a fixed priority order against the whole
//! index, returning the first record that satisfies the active strategy.
//! A strategy is exhausted across all records before the next one begins,
//! and within a strategy the first record in dataset order wins.

use college_agent_nlu::normalize;

use crate::index::{CollegeIndex, IndexedCollege};

/// Resolves a free-text query to a single best-matching college
///
/// Stateless; all per-request data lives in the query and the index
/// snapshot passed in.
pub struct CollegeResolver;

impl CollegeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Find the single best-matching college, or `None`.
    ///
    /// Strategy order:
    /// 1. exact normalized-name match
    /// 2. name substring match (either direction)
    /// 3. location substring match (either direction)
    /// 4. course substring match (either direction)
    /// 5. abbreviation match (name initials or stored short name)
    ///
    /// "No match" is a normal outcome, not an error; the caller falls
    /// back to `general_search`.
    pub fn resolve<'a>(&self, query: &str, index: &'a CollegeIndex) -> Option<&'a IndexedCollege> {
        let q = normalize(query);
        if q.is_empty() {
            return None;
        }

        type Strategy = fn(&str, &IndexedCollege) -> bool;
        let strategies: [(&str, Strategy); 5] = [
            ("exact_name", exact_name),
            ("name_substring", name_substring),
            ("location_substring", location_substring),
            ("course_substring", course_substring),
            ("abbreviation", abbreviation),
        ];

        for (name, matches) in strategies {
            if let Some(college) = index.iter().find(|college| matches(&q, college)) {
                tracing::debug!(strategy = name, college = %college.record.name, "resolved");
                return Some(college);
            }
        }

        None
    }

    /// Fallback search across all record fields.
    ///
    /// Applies the substring test independently to name, location,
    /// courses, facilities and placement text, returning every record
    /// with at least one hit, in dataset order. May be empty.
    pub fn general_search<'a>(&self, query: &str, index: &'a CollegeIndex) -> Vec<&'a IndexedCollege> {
        let q = normalize(query);
        if q.is_empty() {
            return Vec::new();
        }

        index
            .iter()
            .filter(|college| {
                college.normalized_name.contains(&q)
                    || college.normalized_location.contains(&q)
                    || college.normalized_courses.iter().any(|course| course.contains(&q))
                    || field_contains(college.record.facilities.as_deref(), &q)
                    || field_contains(college.record.placement_records.as_deref(), &q)
            })
            .collect()
    }
}

impl Default for CollegeResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn exact_name(q: &str, college: &IndexedCollege) -> bool {
    q == college.normalized_name
}

fn name_substring(q: &str, college: &IndexedCollege) -> bool {
    college.normalized_name.contains(q) || q.contains(&college.normalized_name)
}

fn location_substring(q: &str, college: &IndexedCollege) -> bool {
    !college.normalized_location.is_empty()
        && (college.normalized_location.contains(q) || q.contains(&college.normalized_location))
}

fn course_substring(q: &str, college: &IndexedCollege) -> bool {
    college
        .normalized_courses
        .iter()
        .any(|course| !course.is_empty() && (course.contains(q) || q.contains(course.as_str())))
}

fn abbreviation(q: &str, college: &IndexedCollege) -> bool {
    if q == college.name_initials() {
        return true;
    }
    college
        .record
        .short_name
        .as_deref()
        .is_some_and(|short| q == normalize(short))
}

fn field_contains(field: Option<&str>, q: &str) -> bool {
    field.is_some_and(|text| normalize(text).contains(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use college_agent_core::CollegeRecord;

    fn index() -> CollegeIndex {
        let records: Vec<CollegeRecord> = serde_json::from_value(serde_json::json!([
            {
                "name": "MNIT Jaipur",
                "location": "Jaipur",
                "courses": ["CSE", "ECE"],
                "facilities": "Library, sports complex",
                "placement_records": "Strong CS placements"
            },
            {
                "name": "IIT Jodhpur",
                "short_name": "IITJ",
                "location": "Jodhpur",
                "courses": ["CSE", "AI"]
            },
            {
                "name": "Government Engineering College Ajmer",
                "location": "Ajmer",
                "courses": ["Civil Engineering"]
            },
            {
                "name": "Poornima Engineering College",
                "location": "Sitapura",
                "courses": ["Mechanical"]
            }
        ]))
        .unwrap();
        CollegeIndex::from_records(records).unwrap()
    }

    #[test]
    fn test_exact_name_any_casing() {
        let idx = index();
        let resolver = CollegeResolver::new();

        let hit = resolver.resolve("mnit jaipur", &idx).unwrap();
        assert_eq!(hit.record.name, "MNIT Jaipur");

        let hit = resolver.resolve("MNIT, Jaipur!", &idx).unwrap();
        assert_eq!(hit.record.name, "MNIT Jaipur");
    }

    #[test]
    fn test_name_substring_before_location() {
        let idx = index();
        let resolver = CollegeResolver::new();

        // "jodhpur" is a substring of "iit jodhpur" (strategy 2) before
        // its location ever gets considered
        let hit = resolver.resolve("jodhpur", &idx).unwrap();
        assert_eq!(hit.record.name, "IIT Jodhpur");
    }

    #[test]
    fn test_location_match() {
        let idx = index();
        let resolver = CollegeResolver::new();

        // "sitapura" appears in no name or course, only a location
        let hit = resolver.resolve("sitapura", &idx).unwrap();
        assert_eq!(hit.record.name, "Poornima Engineering College");
    }

    #[test]
    fn test_course_match() {
        let idx = index();
        let resolver = CollegeResolver::new();

        let hit = resolver.resolve("mechanical", &idx).unwrap();
        assert_eq!(hit.record.name, "Poornima Engineering College");
    }

    #[test]
    fn test_abbreviation_match() {
        let idx = index();
        let resolver = CollegeResolver::new();

        // Initials of "Government Engineering College Ajmer"
        let hit = resolver.resolve("geca", &idx).unwrap();
        assert_eq!(hit.record.name, "Government Engineering College Ajmer");

        // Stored short name
        let hit = resolver.resolve("IITJ", &idx).unwrap();
        assert_eq!(hit.record.name, "IIT Jodhpur");
    }

    #[test]
    fn test_first_record_wins_within_strategy() {
        let idx = index();
        let resolver = CollegeResolver::new();

        // Two records contain "Engineering" in the name; the first in
        // dataset order wins
        let hit = resolver.resolve("Engineering", &idx).unwrap();
        assert_eq!(hit.record.name, "Government Engineering College Ajmer");
    }

    #[test]
    fn test_no_match_is_none() {
        let idx = index();
        let resolver = CollegeResolver::new();

        assert!(resolver.resolve("xyz123nonexistent", &idx).is_none());
        assert!(resolver.resolve("???", &idx).is_none());
    }

    #[test]
    fn test_general_search_spans_all_fields() {
        let idx = index();
        let resolver = CollegeResolver::new();

        // "sports" only occurs in MNIT's facilities text
        let hits = resolver.general_search("sports", &idx);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name, "MNIT Jaipur");

        assert!(resolver.general_search("xyz123nonexistent", &idx).is_empty());
    }
}
