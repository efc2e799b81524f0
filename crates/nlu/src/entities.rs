//! Entity extraction from raw query text
//!
//! Closed-vocabulary, deterministic extraction. Location and course
//! extraction deliberately tolerate false negatives: a missed hint only
//! weakens resolution, while a wrong college match is worse than
//! "not found".

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use college_agent_core::{Category, ExtractedEntities};

/// A whole token that reads as a decimal number once thousands
/// separators are stripped
static NUMBER_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("valid regex"));

/// Capitalized query openers and filler words that are never place names
const PROPER_NOUN_STOPWORDS: &[&str] = &[
    "what", "where", "which", "who", "when", "how", "is", "are", "does", "do", "can", "tell",
    "show", "list", "give", "find", "suggest", "college", "colleges", "university", "institute",
    "the", "a", "an", "please", "about", "me",
];

/// Fixed course keywords, always searched before dataset-derived terms
const COURSE_KEYWORDS: &[&str] = &["literature", "science", "engineering", "arts", "commerce"];

/// Extracts numbers, category codes, courses, locations and college-name
/// candidates from a query.
///
/// The course vocabulary and college-name list are seeded from the loaded
/// dataset; the extractor itself stays read-only per request.
pub struct EntityExtractor {
    /// Lowercased course vocabulary (fixed keywords first, then dataset)
    course_vocab: Vec<String>,
    /// Dataset college names, original casing, in dataset order
    college_names: Vec<String>,
}

impl EntityExtractor {
    /// Create an extractor with only the fixed course vocabulary
    pub fn new() -> Self {
        Self {
            course_vocab: COURSE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            college_names: Vec::new(),
        }
    }

    /// Seed the vocabularies from the dataset
    pub fn with_dataset<I, J>(courses: I, college_names: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut extractor = Self::new();
        for course in courses {
            let lower = course.to_lowercase();
            if !lower.is_empty() && !extractor.course_vocab.contains(&lower) {
                extractor.course_vocab.push(lower);
            }
        }
        extractor.college_names = college_names.into_iter().collect();
        extractor
    }

    /// Extract all entities from a query
    pub fn extract(&self, query: &str) -> ExtractedEntities {
        let entities = ExtractedEntities {
            number: extract_number(query),
            category: extract_category(query),
            course: self.extract_course(query),
            locations: extract_locations(query),
            college: self.extract_college(query),
        };

        tracing::debug!(
            number = ?entities.number,
            category = %entities.category,
            course = ?entities.course,
            college = ?entities.college,
            "extracted entities"
        );

        entities
    }

    /// First course-vocabulary term occurring in the query
    fn extract_course(&self, query: &str) -> Option<String> {
        let lower = query.to_lowercase();
        self.course_vocab
            .iter()
            .find(|course| lower.contains(course.as_str()))
            .cloned()
    }

    /// First dataset college name occurring as a substring of the query
    fn extract_college(&self, query: &str) -> Option<String> {
        let lower = query.to_lowercase();
        self.college_names
            .iter()
            .find(|name| lower.contains(&name.to_lowercase()))
            .cloned()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First numeric token in the query, thousands separators stripped.
///
/// Token-level: digits embedded in a word ("xyz123") do not count.
pub fn extract_number(query: &str) -> Option<f64> {
    query.split_whitespace().find_map(|token| {
        let cleaned = token
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .replace(',', "");
        if NUMBER_TOKEN_RE.is_match(&cleaned) {
            cleaned.parse().ok()
        } else {
            None
        }
    })
}

/// First reservation-category code in the query; OPEN when none named
pub fn extract_category(query: &str) -> Category {
    query
        .unicode_words()
        .find_map(Category::parse)
        .unwrap_or_default()
}

/// Proper-noun place-name spans.
///
/// Heuristic: runs of Capitalized words (initial uppercase, rest
/// lowercase) that are not common query openers. All-caps tokens are
/// treated as abbreviations, not places. May return an empty list.
pub fn extract_locations(query: &str) -> Vec<String> {
    let mut spans: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in query.unicode_words() {
        if is_proper_noun(word) {
            current.push(word);
        } else if !current.is_empty() {
            spans.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        spans.push(current.join(" "));
    }

    spans
}

fn is_proper_noun(word: &str) -> bool {
    let mut chars = word.chars();
    let leading_upper = chars.next().is_some_and(|c| c.is_uppercase());
    let rest_lower = chars.all(|c| c.is_lowercase());

    leading_upper && rest_lower && !PROPER_NOUN_STOPWORDS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_first_token_wins() {
        assert_eq!(extract_number("cutoff above 90 or 95"), Some(90.0));
        assert_eq!(extract_number("fees under 1,50,000?"), Some(150_000.0));
        assert_eq!(extract_number("fees under 150,000"), Some(150_000.0));
        assert_eq!(extract_number("no numbers here"), None);
    }

    #[test]
    fn test_number_decimal_and_embedded_digits() {
        assert_eq!(extract_number("cutoff above 92.5 percentile"), Some(92.5));
        // Digits inside a word are not a numeric token
        assert_eq!(extract_number("xyz123nonexistent"), None);
    }

    #[test]
    fn test_category_case_insensitive_with_default() {
        assert_eq!(extract_category("cutoff for obc students"), Category::Obc);
        assert_eq!(extract_category("cutoff for SC"), Category::Sc);
        assert_eq!(extract_category("cutoff above 90"), Category::Open);
    }

    #[test]
    fn test_course_from_fixed_vocabulary() {
        let extractor = EntityExtractor::new();
        assert_eq!(
            extractor.extract("best engineering colleges").course,
            Some("engineering".to_string())
        );
        assert_eq!(extractor.extract("where is MNIT").course, None);
    }

    #[test]
    fn test_course_from_dataset_vocabulary() {
        let extractor = EntityExtractor::with_dataset(
            vec!["CSE".to_string(), "ECE".to_string()],
            vec![],
        );
        assert_eq!(extractor.extract("does it offer cse?").course, Some("cse".to_string()));
    }

    #[test]
    fn test_college_substring_match() {
        let extractor = EntityExtractor::with_dataset(
            vec![],
            vec!["MNIT Jaipur".to_string(), "IIT Jodhpur".to_string()],
        );
        assert_eq!(
            extractor.extract("where is mnit jaipur located?").college,
            Some("MNIT Jaipur".to_string())
        );
        assert_eq!(extractor.extract("some other place").college, None);
    }

    #[test]
    fn test_location_spans() {
        assert_eq!(extract_locations("colleges in Jaipur"), vec!["Jaipur"]);
        assert_eq!(
            extract_locations("Which colleges are in Navi Mumbai or Pune"),
            vec!["Navi Mumbai", "Pune"]
        );
        // All-caps abbreviations are not places
        assert!(extract_locations("courses at MNIT").is_empty());
        assert!(extract_locations("tell me about fees").is_empty());
    }
}
