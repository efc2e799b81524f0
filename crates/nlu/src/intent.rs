//! Keyword intent classification
//!
//! A single generic matcher over a declarative ordered table of
//! (intent, trigger keywords) pairs. The table order IS the tie-break:
//! the first declared intent with any keyword present wins.

use college_agent_core::QueryIntent;

/// One row of the intent table
struct IntentRule {
    intent: QueryIntent,
    keywords: &'static [&'static str],
}

/// Ordered intent table. Case-insensitive substring test per keyword.
///
/// The five attribute intents keep their historical order; the
/// hostel/mess/type intents are declared after them so they never
/// steal a match from the primary five.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: QueryIntent::Location,
        keywords: &["location", "where", "situated"],
    },
    IntentRule {
        intent: QueryIntent::Courses,
        keywords: &["courses", "branch", "study", "program"],
    },
    IntentRule {
        intent: QueryIntent::Placement,
        keywords: &["placement", "job", "recruit", "company", "package"],
    },
    IntentRule {
        intent: QueryIntent::Fee,
        keywords: &["fee", "scholarship", "cost"],
    },
    IntentRule {
        intent: QueryIntent::Facilities,
        keywords: &["facility", "infrastructure", "campus"],
    },
    IntentRule {
        intent: QueryIntent::Hostel,
        keywords: &["hostel"],
    },
    IntentRule {
        intent: QueryIntent::MessFee,
        keywords: &["mess"],
    },
    IntentRule {
        intent: QueryIntent::CollegeType,
        keywords: &["government or private", "type of college", "college type"],
    },
];

/// Maps a raw query to exactly one intent
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a query.
    ///
    /// Cutoff intents are checked first: they are keyed on the presence
    /// of "cutoff" combined with a direction word, and a direction-less
    /// cutoff query becomes a per-college lookup. Attribute intents then
    /// match in table order.
    pub fn classify(&self, query: &str) -> QueryIntent {
        let lower = query.to_lowercase();

        if lower.contains("cutoff") {
            if lower.contains("above") || lower.contains("greater than") {
                return QueryIntent::CutoffAbove;
            }
            if lower.contains("below") || lower.contains("less than") {
                return QueryIntent::CutoffBelow;
            }
            return QueryIntent::CutoffLookup;
        }

        for rule in INTENT_RULES {
            if rule.keywords.iter().any(|keyword| lower.contains(keyword)) {
                return rule.intent;
            }
        }

        QueryIntent::Unknown
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_intents() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Where is MNIT Jaipur located?"), QueryIntent::Location);
        assert_eq!(classifier.classify("courses at IIT Jodhpur"), QueryIntent::Courses);
        assert_eq!(classifier.classify("placement record of GECA"), QueryIntent::Placement);
        assert_eq!(classifier.classify("what is the FEE structure"), QueryIntent::Fee);
        assert_eq!(classifier.classify("campus infrastructure"), QueryIntent::Facilities);
        assert_eq!(classifier.classify("random text"), QueryIntent::Unknown);
    }

    #[test]
    fn test_first_declared_intent_wins() {
        let classifier = IntentClassifier::new();

        // "where" (location) and "courses" both present: location declared first
        assert_eq!(
            classifier.classify("where can I study these courses"),
            QueryIntent::Location
        );
        // "placement" and "fee" both present: placement declared first
        assert_eq!(
            classifier.classify("placement and fee details"),
            QueryIntent::Placement
        );
    }

    #[test]
    fn test_cutoff_intents() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("colleges with cutoff above 90"), QueryIntent::CutoffAbove);
        assert_eq!(
            classifier.classify("cutoff greater than 85 for OBC"),
            QueryIntent::CutoffAbove
        );
        assert_eq!(classifier.classify("cutoff below 80"), QueryIntent::CutoffBelow);
        assert_eq!(classifier.classify("cutoff less than 70"), QueryIntent::CutoffBelow);
        assert_eq!(classifier.classify("cutoff of MNIT Jaipur for SC"), QueryIntent::CutoffLookup);
    }

    #[test]
    fn test_supplemental_intents_declared_last() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("is there a hostel"), QueryIntent::Hostel);
        assert_eq!(classifier.classify("monthly mess charges"), QueryIntent::MessFee);
        // "hostel fee" hits the fee intent first, per declared order
        assert_eq!(classifier.classify("hostel fee at MNIT"), QueryIntent::Fee);
    }
}
