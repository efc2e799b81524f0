//! Core types for the college admissions agent
//!
//! This crate provides foundational types used across all other crates:
//! - The college dataset record and its cutoff table
//! - Reservation category codes
//! - Query, intent and extracted-entity types
//! - Error types

pub mod college;
pub mod error;
pub mod query;

pub use college::{Category, CollegeRecord, CutoffTable};
pub use error::{Error, Result};
pub use query::{ExtractedEntities, Query, QueryIntent};
