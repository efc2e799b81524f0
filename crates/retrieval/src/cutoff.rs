//! Cutoff-percentile filtering
//!
//! Filters the index by a strict comparison against each record's
//! per-category cutoff table. Records without a cutoff table, or without
//! an entry for the requested category, are excluded; that is data
//! degradation, not an error. Results keep dataset order.

use college_agent_core::Category;

use crate::index::{CollegeIndex, IndexedCollege};

/// Colleges whose cutoff for `category` is strictly greater than
/// `percentile`, in dataset order
pub fn filter_above(
    index: &CollegeIndex,
    percentile: f64,
    category: Category,
) -> Vec<&IndexedCollege> {
    filter_by(index, category, |cutoff| cutoff > percentile)
}

/// Colleges whose cutoff for `category` is strictly less than
/// `percentile`, in dataset order
pub fn filter_below(
    index: &CollegeIndex,
    percentile: f64,
    category: Category,
) -> Vec<&IndexedCollege> {
    filter_by(index, category, |cutoff| cutoff < percentile)
}

fn filter_by(
    index: &CollegeIndex,
    category: Category,
    predicate: impl Fn(f64) -> bool,
) -> Vec<&IndexedCollege> {
    index
        .iter()
        .filter(|college| college.record.cutoff_for(category).is_some_and(&predicate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use college_agent_core::CollegeRecord;

    fn index() -> CollegeIndex {
        let records: Vec<CollegeRecord> = serde_json::from_value(serde_json::json!([
            {"name": "A", "cutoff": {"OPEN": 97.0, "SC": 89.0}},
            {"name": "B", "cutoff": {"OPEN": 92.0}},
            {"name": "C", "cutoff": {"SC": 75.0}},
            {"name": "D"}
        ]))
        .unwrap();
        CollegeIndex::from_records(records).unwrap()
    }

    fn names(colleges: &[&IndexedCollege]) -> Vec<String> {
        colleges.iter().map(|c| c.record.name.clone()).collect()
    }

    #[test]
    fn test_above_strictly_greater_dataset_order() {
        let idx = index();

        assert_eq!(names(&filter_above(&idx, 90.0, Category::Open)), vec!["A", "B"]);
        // Strict: a cutoff equal to the threshold is excluded
        assert_eq!(names(&filter_above(&idx, 92.0, Category::Open)), vec!["A"]);
    }

    #[test]
    fn test_below_strictly_less() {
        let idx = index();

        assert_eq!(names(&filter_below(&idx, 95.0, Category::Open)), vec!["B"]);
        assert_eq!(names(&filter_below(&idx, 90.0, Category::Sc)), vec!["A", "C"]);
    }

    #[test]
    fn test_missing_category_or_table_excluded() {
        let idx = index();

        // C has no OPEN entry, D has no table at all
        let hits = filter_above(&idx, 0.0, Category::Open);
        assert_eq!(names(&hits), vec!["A", "B"]);

        // Empty result is a valid outcome
        assert!(filter_above(&idx, 99.0, Category::Open).is_empty());
    }

    #[test]
    fn test_monotonic_in_threshold() {
        let idx = index();

        let mut previous = usize::MAX;
        for percentile in [0.0, 50.0, 90.0, 92.0, 97.0, 100.0] {
            let count = filter_above(&idx, percentile, Category::Open).len();
            assert!(count <= previous, "filter_above not monotonic at {}", percentile);
            previous = count;
        }
    }
}
