//! Dataset loading
//!
//! The loader's contract to the rest of the system: produce an ordered
//! `Vec<CollegeRecord>` with required fields populated. Missing optional
//! fields become `None`; a malformed cutoff table degrades to "absent"
//! for that record (see the core deserializer). Only an unreadable or
//! structurally invalid file fails the load.

use std::path::Path;

use serde::Deserialize;

use college_agent_core::CollegeRecord;

use crate::RetrievalError;

/// Top-level dataset document: `{"colleges": [...]}`
#[derive(Debug, Deserialize)]
struct CollegeDataset {
    colleges: Vec<CollegeRecord>,
}

/// Load college records from a JSON file.
///
/// Accepts either the wrapped `{"colleges": [...]}` document or a bare
/// top-level array of records.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<CollegeRecord>, RetrievalError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RetrievalError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_dataset(&content)
}

/// Parse dataset JSON from a string
pub fn parse_dataset(content: &str) -> Result<Vec<CollegeRecord>, RetrievalError> {
    if let Ok(dataset) = serde_json::from_str::<CollegeDataset>(content) {
        return Ok(dataset.colleges);
    }

    serde_json::from_str::<Vec<CollegeRecord>>(content)
        .map_err(|e| RetrievalError::Parse(e.to_string()))
}
