//! Core error types

use thiserror::Error;

/// Errors shared across the agent crates
#[derive(Error, Debug)]
pub enum Error {
    /// The query text was empty after trimming. The only input-contract
    /// violation that is rejected outright.
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
