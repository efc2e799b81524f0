//! Query understanding for the college admissions agent
//!
//! Features:
//! - Accent- and punctuation-tolerant text normalization
//! - Closed-vocabulary entity extraction (number, category, course,
//!   location, college name)
//! - Declarative keyword intent classification with an explicit,
//!   first-declared-wins tie-break

pub mod entities;
pub mod intent;
pub mod normalize;

pub use entities::EntityExtractor;
pub use intent::IntentClassifier;
pub use normalize::normalize;
