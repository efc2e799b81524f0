//! College admissions agent
//!
//! Features:
//! - Stateless per-request query pipeline: intent classification and
//!   entity extraction feed the resolver cascade or the cutoff filter
//! - Template-based response composition with literal fallbacks
//! - Atomic dataset reload without disturbing in-flight requests

pub mod agent;
pub mod composer;

pub use agent::CollegeAgent;
pub use composer::ResponseComposer;

use thiserror::Error;

/// Agent errors. Resolution misses are answers, not errors; only input
/// violations and dataset problems surface here.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<college_agent_retrieval::RetrievalError> for AgentError {
    fn from(err: college_agent_retrieval::RetrievalError) -> Self {
        AgentError::Dataset(err.to_string())
    }
}

impl From<college_agent_core::Error> for AgentError {
    fn from(err: college_agent_core::Error) -> Self {
        match err {
            college_agent_core::Error::EmptyQuery => AgentError::EmptyQuery,
            college_agent_core::Error::Dataset(msg) => AgentError::Dataset(msg),
            college_agent_core::Error::Internal(msg) => AgentError::Internal(msg),
        }
    }
}
