//! Response composition
//!
//! Each intent maps to one fixed template whose placeholders are filled
//! from the resolved record. Every placeholder has a literal fallback
//! phrase, so composition is total: it never fails and never returns an
//! empty string, whatever shape the record is in.

use college_agent_config::ResponseTemplates;
use college_agent_core::{Category, CollegeRecord, QueryIntent};
use college_agent_retrieval::IndexedCollege;

/// Fills response templates from college records
pub struct ResponseComposer {
    templates: ResponseTemplates,
}

impl ResponseComposer {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self { templates }
    }

    /// Compose an answer about one college for a detected intent.
    ///
    /// `category` only matters for cutoff lookups.
    pub fn compose(&self, college: &CollegeRecord, intent: QueryIntent, category: Category) -> String {
        let fallbacks = &self.templates.fallbacks;

        match intent {
            QueryIntent::Location => format!(
                "{} is located in {}. It is situated in a strategic location that offers great \
                 opportunities for students.",
                college.name,
                non_empty(&college.location, &fallbacks.location),
            ),
            QueryIntent::Courses => format!(
                "{} offers a diverse range of courses including: {}. These programs provide \
                 comprehensive education in various fields.",
                college.name,
                self.course_list(college),
            ),
            QueryIntent::Placement => format!(
                "The placement record at {} is impressive. Students have an average package of {} \
                 and have been recruited by top companies. The highest package recorded is {}.",
                college.name,
                opt(&college.average_package, &fallbacks.average_package),
                opt(&college.highest_package, &fallbacks.highest_package),
            ),
            QueryIntent::Fee => format!(
                "The fee structure at {} is competitive. The estimated fee structure is {}. \
                 Scholarship information: {}.",
                college.name,
                opt(&college.fee_structure, &fallbacks.fee_structure),
                opt(&college.scholarships, &fallbacks.scholarships),
            ),
            QueryIntent::Facilities => format!(
                "{} boasts excellent facilities including: {}. The campus is designed to provide \
                 a holistic learning environment for students.",
                college.name,
                opt(&college.facilities, &fallbacks.facilities),
            ),
            QueryIntent::Hostel => {
                if college.hostel_available {
                    format!(
                        "{} offers hostel accommodation. Hostel fee: {}.",
                        college.name,
                        number_or(&college.hostel_fee, &fallbacks.not_available),
                    )
                } else {
                    format!("{} does not list hostel accommodation.", college.name)
                }
            }
            QueryIntent::MessFee => format!(
                "Mess fee at {}: {}.",
                college.name,
                number_or(&college.mess_fee, &fallbacks.not_available),
            ),
            QueryIntent::CollegeType => format!(
                "{} is a {} institution. Affiliation: {}.",
                college.name,
                opt(&college.college_type, &fallbacks.not_available),
                opt(&college.affiliation, &fallbacks.not_available),
            ),
            QueryIntent::CutoffLookup => {
                let value = college
                    .cutoff_for(category)
                    .map(|p| format!("{}", p))
                    .unwrap_or_else(|| fallbacks.not_available.clone());
                format!("Cutoff at {} for {}: {}.", college.name, category, value)
            }
            // Range filters are composed from the filtered list, not here
            QueryIntent::CutoffAbove | QueryIntent::CutoffBelow | QueryIntent::Unknown => {
                self.compose_default(college)
            }
        }
    }

    /// Generic single-college answer for intent `none`
    pub fn compose_default(&self, college: &CollegeRecord) -> String {
        let fallbacks = &self.templates.fallbacks;
        let mut response = format!(
            "Here's some information about {}. Located in {}, it offers courses like {}. With an \
             average package of {}, it's a promising institution for students.",
            college.name,
            non_empty(&college.location, &fallbacks.location),
            self.course_list(college),
            opt(&college.average_package, &fallbacks.average_package),
        );

        if let Some(website) = &college.website {
            response.push_str(&format!("\n{} {}", self.templates.labels.website, website));
        }

        response
    }

    /// Summary for the "no single college, several field matches" case:
    /// one line block per record, joined with blank lines under a
    /// count header.
    pub fn compose_multiple(&self, matches: &[&IndexedCollege]) -> String {
        let labels = &self.templates.labels;
        let header = self
            .templates
            .multiple_matches_header
            .replace("{count}", &matches.len().to_string());

        let entries: Vec<String> = matches
            .iter()
            .map(|college| {
                format!(
                    "{} {} - {}\n{} {}",
                    labels.name,
                    college.record.name,
                    non_empty(&college.record.location, &self.templates.fallbacks.location),
                    labels.courses,
                    self.course_list(&college.record),
                )
            })
            .collect();

        format!("{}\n\n{}", header, entries.join("\n\n"))
    }

    /// Literal no-match message echoing the original query text
    pub fn compose_no_match(&self, query: &str) -> String {
        self.templates.no_match.replace("{query}", query)
    }

    /// Result of a cutoff range filter, or the documented empty-result
    /// message. `direction` reads "above" or "below".
    pub fn compose_cutoff_results(
        &self,
        matches: &[&IndexedCollege],
        direction: &str,
        percentile: f64,
        category: Category,
    ) -> String {
        let percentile_text = format!("{}", percentile);

        if matches.is_empty() {
            return self
                .templates
                .no_cutoff_matches
                .replace("{direction}", direction)
                .replace("{percentile}", &percentile_text);
        }

        let header = self
            .templates
            .cutoff_header
            .replace("{direction}", direction)
            .replace("{percentile}", &percentile_text);

        let lines: Vec<String> = matches
            .iter()
            .map(|college| {
                // Filter predicate guarantees the entry exists
                let cutoff = college.record.cutoff_for(category).unwrap_or_default();
                format!(
                    "{} {} - {} (Cutoff: {})",
                    self.templates.labels.name,
                    college.record.name,
                    non_empty(&college.record.location, &self.templates.fallbacks.location),
                    cutoff,
                )
            })
            .collect();

        format!("{}\n{}", header, lines.join("\n"))
    }

    /// Asked for a cutoff range but gave no number
    pub fn cutoff_prompt(&self) -> String {
        self.templates.cutoff_prompt.clone()
    }

    /// Last-resort reply; the conversation never ends with an error
    pub fn generic_failure(&self) -> String {
        self.templates.generic_failure.clone()
    }

    fn course_list(&self, college: &CollegeRecord) -> String {
        if college.courses.is_empty() {
            self.templates.fallbacks.courses.clone()
        } else {
            college.courses.join(", ")
        }
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn opt(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn number_or(value: &Option<f64>, fallback: &str) -> String {
    value.map(|n| format!("{}", n)).unwrap_or_else(|| fallback.to_string())
}
