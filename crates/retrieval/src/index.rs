//! In-memory college index
//!
//! The index is built once from loaded records, enriching each with
//! normalized variants of its name, location and courses so that query
//! matching never re-normalizes record fields. The index is immutable
//! for its lifetime; reloads build a fresh index and swap the shared
//! handle, leaving in-flight requests on their snapshot.

use std::sync::Arc;

use parking_lot::RwLock;

use college_agent_core::CollegeRecord;
use college_agent_nlu::normalize;

use crate::RetrievalError;

/// One record plus its precomputed normalized variants
#[derive(Debug, Clone)]
pub struct IndexedCollege {
    pub record: CollegeRecord,
    /// `normalize(record.name)`
    pub normalized_name: String,
    /// `normalize(record.location)`
    pub normalized_location: String,
    /// `normalize` of each course, same order as `record.courses`
    pub normalized_courses: Vec<String>,
}

impl IndexedCollege {
    fn new(record: CollegeRecord) -> Self {
        let normalized_name = normalize(&record.name);
        let normalized_location = normalize(&record.location);
        let normalized_courses = record.courses.iter().map(|c| normalize(c)).collect();

        Self {
            record,
            normalized_name,
            normalized_location,
            normalized_courses,
        }
    }

    /// First letter of each word of the original name, lowercased,
    /// e.g. "Malaviya National Institute of Technology" -> "mniot"
    pub fn name_initials(&self) -> String {
        self.record
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_lowercase())
            .collect()
    }
}

/// Ordered, immutable collection of indexed college records
#[derive(Debug, Default)]
pub struct CollegeIndex {
    colleges: Vec<IndexedCollege>,
}

impl CollegeIndex {
    /// Build an index from loaded records.
    ///
    /// Records with an empty name violate the dataset invariant and are
    /// skipped with a warning rather than failing the load.
    pub fn from_records(records: Vec<CollegeRecord>) -> Result<Self, RetrievalError> {
        let mut colleges = Vec::with_capacity(records.len());

        for record in records {
            if record.name.trim().is_empty() {
                tracing::warn!("Skipping college record with empty name");
                continue;
            }
            colleges.push(IndexedCollege::new(record));
        }

        if colleges.is_empty() {
            return Err(RetrievalError::EmptyDataset);
        }

        tracing::info!(colleges = colleges.len(), "college index built");
        Ok(Self { colleges })
    }

    /// Iterate records in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &IndexedCollege> {
        self.colleges.iter()
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    /// College names in dataset order, for the entity extractor
    pub fn college_names(&self) -> Vec<String> {
        self.colleges.iter().map(|c| c.record.name.clone()).collect()
    }

    /// Unique course names in first-seen dataset order, for the
    /// entity extractor's vocabulary
    pub fn course_vocabulary(&self) -> Vec<String> {
        let mut vocab: Vec<String> = Vec::new();
        for college in &self.colleges {
            for course in &college.record.courses {
                if !vocab.iter().any(|seen| seen.eq_ignore_ascii_case(course)) {
                    vocab.push(course.clone());
                }
            }
        }
        vocab
    }
}

/// Shared handle to the current index snapshot.
///
/// Readers take a cheap `Arc` clone; a reload builds a new index and
/// swaps it in atomically. In-flight requests keep the snapshot they
/// started with.
#[derive(Clone)]
pub struct IndexHandle {
    inner: Arc<RwLock<Arc<CollegeIndex>>>,
}

impl IndexHandle {
    pub fn new(index: CollegeIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Current immutable snapshot
    pub fn snapshot(&self) -> Arc<CollegeIndex> {
        Arc::clone(&self.inner.read())
    }

    /// Replace the snapshot used by new requests
    pub fn swap(&self, index: CollegeIndex) {
        *self.inner.write() = Arc::new(index);
        tracing::info!("college index swapped");
    }
}
