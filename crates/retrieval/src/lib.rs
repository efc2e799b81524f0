//! Dataset index and retrieval for the college admissions agent
//!
//! Features:
//! - JSON dataset loader with tolerant per-record degradation
//! - Immutable in-memory index with precomputed normalized variants
//! - Atomically swappable index handle for reloads
//! - Ordered cascade of matching strategies plus general fallback search
//! - Cutoff-percentile filtering per reservation category

pub mod cutoff;
pub mod index;
pub mod loader;
pub mod resolver;

pub use cutoff::{filter_above, filter_below};
pub use index::{CollegeIndex, IndexHandle, IndexedCollege};
pub use loader::load_dataset;
pub use resolver::CollegeResolver;

use thiserror::Error;

/// Retrieval errors. Resolution misses are NOT errors; these cover only
/// dataset loading and indexing.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Dataset file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("Dataset contains no usable college records")]
    EmptyDataset,
}
